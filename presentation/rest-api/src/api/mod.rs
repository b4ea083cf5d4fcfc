pub mod error;
pub mod health;
pub mod price;
pub mod tags;
