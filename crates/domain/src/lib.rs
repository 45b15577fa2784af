//! Ferrous Responder Domain Layer
pub mod config;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{CacheError, DomainError};
