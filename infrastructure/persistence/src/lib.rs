pub mod db;
pub mod price {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
    pub mod seed;
}
