use crate::dns::forwarding::MessageBuilder;
use async_trait::async_trait;
use ferrous_responder_application::ports::{DnsExchange, DnsHandler, ResponseWriter};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Terminal stage: forwards the request to one primary upstream. A transport
/// failure turns into a SERVFAIL reply.
pub struct ForwardStage {
    upstream: SocketAddr,
    exchange: Arc<dyn DnsExchange>,
}

impl ForwardStage {
    pub fn new(upstream: SocketAddr, exchange: Arc<dyn DnsExchange>) -> Self {
        Self { upstream, exchange }
    }
}

#[async_trait]
impl DnsHandler for ForwardStage {
    fn name(&self) -> &'static str {
        "forward"
    }

    async fn serve_dns(&self, request: &Message, writer: &mut dyn ResponseWriter) {
        let response = match self.exchange.exchange(request, self.upstream).await {
            Ok(response) => {
                debug!(
                    upstream = %self.upstream,
                    rcode = ?response.response_code(),
                    answers = response.answers().len(),
                    "Upstream answered"
                );
                response
            }
            Err(e) => {
                warn!(upstream = %self.upstream, error = %e, "Upstream exchange failed");
                MessageBuilder::servfail_for(request)
            }
        };

        if let Err(e) = writer.write_msg(response).await {
            warn!(error = %e, "Failed to write response");
        }
    }
}
