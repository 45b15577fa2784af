use std::sync::atomic::{AtomicU64, Ordering};

/// Cache metrics
#[derive(Default, Debug)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub expirations: AtomicU64,
    pub insertions: AtomicU64,
    pub rejected_full: AtomicU64,
    pub sweeps: AtomicU64,
    pub swept: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        let total = hits
            + self.misses.load(Ordering::Relaxed) as f64
            + self.expirations.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}
