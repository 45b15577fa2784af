use anyhow::Context;
use ferrous_responder_application::ports::{Clock, DnsExchange, DnsHandler};
use ferrous_responder_domain::Config;
use ferrous_responder_infrastructure::dns::{
    CacheStage, CacheSweeper, FailoverInterceptor, ForwardStage, MemoryCache, SystemClock,
    UdpExchange,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Assembled resolution chain: cache, then failover around the forwarder.
pub struct Pipeline {
    pub handler: Arc<dyn DnsHandler>,
    pub cache: Arc<MemoryCache>,
    pub failover: Arc<FailoverInterceptor>,
}

impl Pipeline {
    /// Start the background sweep of this pipeline's cache.
    pub fn start_sweeper(&self, config: &Config) -> tokio::task::JoinHandle<()> {
        CacheSweeper::from_config(Arc::clone(&self.cache), &config.cache).start()
    }
}

pub fn build_pipeline(config: &Config) -> anyhow::Result<Pipeline> {
    let upstream: SocketAddr = config
        .upstream
        .server
        .parse()
        .with_context(|| format!("invalid upstream address '{}'", config.upstream.server))?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let cache = Arc::new(MemoryCache::from_config(&config.cache, clock));
    let exchange: Arc<dyn DnsExchange> = Arc::new(UdpExchange::from_config(&config.failover));

    let forward = Arc::new(ForwardStage::new(upstream, Arc::clone(&exchange)));
    let failover = Arc::new(FailoverInterceptor::from_config(
        &config.failover,
        exchange,
        forward,
    ));
    let handler: Arc<dyn DnsHandler> =
        Arc::new(CacheStage::new(cache.clone(), failover.clone()));

    info!(
        upstream = %upstream,
        stage = handler.name(),
        fallback_servers = failover.servers().len(),
        "Pipeline ready"
    );

    Ok(Pipeline {
        handler,
        cache,
        failover,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pipeline_rejects_bad_upstream() {
        let mut config = Config::default();
        config.upstream.server = "not-an-address".to_string();

        let err = build_pipeline(&config).err().unwrap();
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn test_build_pipeline_defaults() {
        let pipeline = build_pipeline(&Config::default()).unwrap();

        assert_eq!(pipeline.handler.name(), "cache");
        assert_eq!(pipeline.cache.max_entries(), 0);
        assert!(pipeline.failover.servers().is_empty());
    }

    #[test]
    fn test_build_pipeline_keeps_valid_fallbacks() {
        let mut config = Config::default();
        config.failover.fallback_servers = vec![
            "9.9.9.9:53".to_string(),
            "not-a-server".to_string(),
            "[2620:fe::fe]:53".to_string(),
        ];

        let pipeline = build_pipeline(&config).unwrap();
        let servers: Vec<String> = pipeline
            .failover
            .servers()
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(servers, vec!["9.9.9.9:53", "[2620:fe::fe]:53"]);
    }
}
