pub mod config;
pub mod error;
pub mod generator;
pub mod telemetry;

pub use error::AppError;
pub use generator::{GenerateError, UsernameBatch, UsernameGenerator, UsernameTemplate};
