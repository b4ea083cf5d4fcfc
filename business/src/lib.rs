pub mod application {
    pub mod price {
        pub mod get_applicable;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod price {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod resolver;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_applicable;
        }
    }
}
