use super::CaptureWriter;
use crate::dns::cache::CacheKey;
use async_trait::async_trait;
use ferrous_responder_application::ports::{AnswerCache, DnsHandler, ResponseWriter};
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache decorator for a pipeline stage
///
/// Serves hits straight from the cache. On a miss, runs `next` and stores
/// NOERROR responses that carry answers before writing them through.
pub struct CacheStage {
    cache: Arc<dyn AnswerCache>,
    next: Arc<dyn DnsHandler>,
}

impl CacheStage {
    pub fn new(cache: Arc<dyn AnswerCache>, next: Arc<dyn DnsHandler>) -> Self {
        Self { cache, next }
    }

    fn cacheable(response: &Message) -> bool {
        response.response_code() == ResponseCode::NoError && !response.answers().is_empty()
    }
}

#[async_trait]
impl DnsHandler for CacheStage {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn serve_dns(&self, request: &Message, writer: &mut dyn ResponseWriter) {
        let Some(question) = request.queries().first() else {
            self.next.serve_dns(request, writer).await;
            return;
        };
        let key = CacheKey::from_query(question);

        match self.cache.get(key.as_str()) {
            Ok(mut answer) => {
                debug!(key = %key, "Cache HIT");
                answer.set_id(request.id());
                if let Err(e) = writer.write_msg(answer).await {
                    warn!(key = %key, error = %e, "Failed to write cached response");
                }
                return;
            }
            Err(e) => debug!(key = %key, reason = %e, "Cache MISS"),
        }

        let mut capture = CaptureWriter::new();
        self.next.serve_dns(request, &mut capture).await;
        let Some(response) = capture.into_last() else {
            return;
        };

        if Self::cacheable(&response) {
            if let Err(e) = self.cache.set(key.as_str(), response.clone()) {
                debug!(key = %key, error = %e, "Response not cached");
            }
        }

        if let Err(e) = writer.write_msg(response).await {
            warn!(key = %key, error = %e, "Failed to write response");
        }
    }
}
