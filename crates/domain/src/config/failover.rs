use serde::Deserialize;

/// Failover configuration
///
/// Servers are raw `host:port` strings. Entries that are not literal
/// IPv4/IPv6 endpoints are dropped with a warning when the fallback list is
/// built, they never fail validation.
#[derive(Debug, Clone, Deserialize)]
pub struct FailoverConfig {
    #[serde(default)]
    pub fallback_servers: Vec<String>,

    /// Per-server exchange timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            fallback_servers: Vec::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
