mod views;
pub mod utils;
mod routes;
pub mod configs;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::AppConfig;
pub use crate::error::ConfigError;
