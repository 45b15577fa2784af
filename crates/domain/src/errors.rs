use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Timeout talking to {server}")]
    TransportTimeout { server: SocketAddr },

    #[error("Failed to encode DNS message: {0}")]
    EncodeError(String),
}

impl DomainError {
    /// Errors raised by the network leg of an exchange, as opposed to a
    /// message that could not be built in the first place.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::TransportTimeout { .. } | Self::IoError(_) | Self::InvalidDnsResponse(_)
        )
    }
}

/// Failures reported by an answer cache. All of them are recoverable: the
/// caller resolves upstream and repopulates with `set`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("{key} not found")]
    NotFound { key: String },

    #[error("{key} expired")]
    Expired { key: String },

    #[error("Cache is full")]
    Full,

    /// Reserved for persistent backends.
    #[error("Serializer error")]
    Serializer,
}

impl CacheError {
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Expired { .. })
    }
}
