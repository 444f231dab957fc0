pub mod continents;
pub mod countries;
pub mod error;
pub mod health;

pub use error::AppError;
