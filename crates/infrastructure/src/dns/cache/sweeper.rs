use super::MemoryCache;
use ferrous_responder_application::ports::AnswerCache;
use ferrous_responder_domain::config::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Background task that sweeps the answer cache once per interval.
///
/// The task has no shutdown hook and lives as long as the runtime does.
pub struct CacheSweeper {
    cache: Arc<MemoryCache>,
    interval: Duration,
}

impl CacheSweeper {
    pub fn new(cache: Arc<MemoryCache>, interval: Duration) -> Self {
        Self { cache, interval }
    }

    pub fn from_config(cache: Arc<MemoryCache>, config: &CacheConfig) -> Self {
        Self::new(cache, Duration::from_secs(config.sweep_interval_secs))
    }

    /// Spawn the sweep loop. The first sweep runs one full interval after
    /// start.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let cache = self.cache;
        let interval = self.interval;

        tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "Cache sweeper started");

            loop {
                sleep(interval).await;
                Self::sweep_cycle(&cache);
            }
        })
    }

    fn sweep_cycle(cache: &MemoryCache) {
        let removed = cache.sweep();
        debug!(removed = removed, cache_size = cache.len(), "Sweep cycle finished");
    }
}
