pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod site;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
