use super::pool::{PooledContext, WriterPool};
use super::servers::FallbackServers;
use crate::dns::forwarding::MessageBuilder;
use async_trait::async_trait;
use ferrous_responder_application::ports::{DnsExchange, DnsHandler, ResponseWriter};
use ferrous_responder_domain::config::FailoverConfig;
use ferrous_responder_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stage that masks SERVFAIL answers of the stages behind it by retrying
/// the question against fallback servers, one at a time, in order.
pub struct FailoverInterceptor {
    servers: FallbackServers,
    exchange: Arc<dyn DnsExchange>,
    next: Arc<dyn DnsHandler>,
    pool: WriterPool,
}

impl FailoverInterceptor {
    pub fn new(
        servers: FallbackServers,
        exchange: Arc<dyn DnsExchange>,
        next: Arc<dyn DnsHandler>,
    ) -> Self {
        Self {
            servers,
            exchange,
            next,
            pool: WriterPool::default(),
        }
    }

    pub fn from_config(
        config: &FailoverConfig,
        exchange: Arc<dyn DnsExchange>,
        next: Arc<dyn DnsHandler>,
    ) -> Self {
        Self::new(
            FallbackServers::parse(&config.fallback_servers),
            exchange,
            next,
        )
    }

    pub fn servers(&self) -> &FallbackServers {
        &self.servers
    }

    pub fn pool(&self) -> &WriterPool {
        &self.pool
    }
}

#[async_trait]
impl DnsHandler for FailoverInterceptor {
    fn name(&self) -> &'static str {
        "failover"
    }

    async fn serve_dns(&self, request: &Message, writer: &mut dyn ResponseWriter) {
        let mut wrapped = FailoverWriter {
            inner: writer,
            servers: &self.servers,
            exchange: self.exchange.as_ref(),
            ctx: self.pool.acquire(),
        };

        self.next.serve_dns(request, &mut wrapped).await;
    }
}

/// Writer installed in front of the caller's writer for one query.
pub struct FailoverWriter<'a> {
    inner: &'a mut dyn ResponseWriter,
    servers: &'a FallbackServers,
    exchange: &'a dyn DnsExchange,
    ctx: PooledContext<'a>,
}

impl FailoverWriter<'_> {
    fn wants_retry(&self, response: &Message) -> bool {
        !response.queries().is_empty()
            && !self.servers.is_empty()
            && response.response_code() == ResponseCode::ServFail
            && response.recursion_desired()
    }
}

#[async_trait]
impl ResponseWriter for FailoverWriter<'_> {
    async fn write_msg(&mut self, msg: Message) -> Result<(), DomainError> {
        if !self.wants_retry(&msg) {
            return self.inner.write_msg(msg).await;
        }

        let retry = msg.queries().first().map(|question| {
            MessageBuilder::write_question_label(&mut self.ctx.label, question);
            MessageBuilder::build_retry_query(question, msg.checking_disabled())
        });
        let Some(retry) = retry else {
            return self.inner.write_msg(msg).await;
        };

        let servers = self.servers;
        for &server in servers.iter() {
            self.ctx.attempts += 1;

            match self.exchange.exchange(&retry, server).await {
                Ok(mut response) => {
                    debug!(
                        query = %self.ctx.label,
                        server = %server,
                        attempts = self.ctx.attempts,
                        rcode = ?response.response_code(),
                        "Failover query answered"
                    );
                    response.set_id(msg.id());
                    return self.inner.write_msg(response).await;
                }
                Err(e) => {
                    warn!(
                        query = %self.ctx.label,
                        server = %server,
                        error = %e,
                        "Failover query failed"
                    );
                }
            }
        }

        self.inner.write_msg(msg).await
    }
}
