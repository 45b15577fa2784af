use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Ordered, validated fallback endpoints. Fixed after construction.
#[derive(Debug, Clone, Default)]
pub struct FallbackServers {
    servers: Arc<[SocketAddr]>,
}

impl FallbackServers {
    /// Keep every entry that is a literal IPv4 or IPv6 `host:port`, in the
    /// order given. Anything else is logged and skipped.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut servers = Vec::with_capacity(raw.len());

        for entry in raw {
            let entry = entry.as_ref().trim();
            match entry.parse::<SocketAddr>() {
                Ok(addr) => servers.push(addr),
                Err(e) => {
                    warn!(
                        server = %entry,
                        error = %e,
                        "Fallback server is not a valid ip:port, skipping"
                    );
                }
            }
        }

        if !servers.is_empty() {
            info!(
                count = servers.len(),
                rejected = raw.len() - servers.len(),
                "Fallback servers configured"
            );
        }

        Self {
            servers: servers.into(),
        }
    }

    pub fn as_slice(&self) -> &[SocketAddr] {
        &self.servers
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocketAddr> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl From<Vec<SocketAddr>> for FallbackServers {
    fn from(servers: Vec<SocketAddr>) -> Self {
        Self {
            servers: servers.into(),
        }
    }
}
