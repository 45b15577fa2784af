pub mod cache;
pub mod failover;
pub mod forwarding;
pub mod stages;
pub mod transport;

pub use cache::{CacheKey, CacheMetrics, CacheSweeper, ManualClock, MemoryCache, SystemClock};
pub use failover::{FailoverInterceptor, FallbackServers, WriterPool};
pub use forwarding::MessageBuilder;
pub use stages::{CacheStage, CaptureWriter, ForwardStage};
pub use transport::UdpExchange;
