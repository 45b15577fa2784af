// Answer cache: storage, aging, sweeping

pub mod clock;
pub mod entry;
pub mod key;
pub mod metrics;
pub mod storage;
pub mod sweeper;

pub use clock::{ManualClock, SystemClock};
pub use entry::is_empty_payload;
pub use key::CacheKey;
pub use metrics::CacheMetrics;
pub use storage::MemoryCache;
pub use sweeper::CacheSweeper;
