pub mod calendar;
pub mod error;
pub mod health;
pub mod metrics;

pub use error::AppError;
