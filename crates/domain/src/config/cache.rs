use serde::Deserialize;

/// Answer cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of distinct keys (0 = unbounded)
    #[serde(default)]
    pub max_entries: usize,

    /// Seconds between two background sweeps (default: one hour)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 0,
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_sweep_interval() -> u64 {
    3600
}
