// Failover: retry SERVFAIL answers against fallback servers

pub mod interceptor;
pub mod pool;
pub mod servers;

pub use interceptor::{FailoverInterceptor, FailoverWriter};
pub use pool::{InterceptContext, PooledContext, WriterPool};
pub use servers::FallbackServers;
