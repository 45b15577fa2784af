//! Configuration module for Ferrous Responder
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `cache`: Answer cache capacity and sweeping
//! - `failover`: Fallback servers queried after SERVFAIL
//! - `upstream`: Primary upstream used by the forward stage
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod failover;
pub mod logging;
pub mod root;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use failover::FailoverConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use upstream::UpstreamConfig;
