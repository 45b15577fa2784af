use async_trait::async_trait;
use ferrous_responder_domain::DomainError;
use hickory_proto::op::Message;

/// Delivers the response of one query back towards its requester.
#[async_trait]
pub trait ResponseWriter: Send {
    async fn write_msg(&mut self, msg: Message) -> Result<(), DomainError>;
}

/// One stage of a query pipeline.
///
/// A stage either answers through `writer` or hands the query to the next
/// stage, possibly wrapping `writer` for the duration of that call.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn serve_dns(&self, request: &Message, writer: &mut dyn ResponseWriter);
}
