use async_trait::async_trait;
use ferrous_responder_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;

/// Sends one message to one server and returns its reply.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(&self, request: &Message, server: SocketAddr)
        -> Result<Message, DomainError>;
}
