use async_trait::async_trait;
use ferrous_responder_application::ports::DnsExchange;
use ferrous_responder_domain::config::FailoverConfig;
use ferrous_responder_domain::DomainError;
use hickory_proto::op::Message;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Request/response exchange over UDP, one fresh socket per exchange.
///
/// Send and receive are each bounded by `timeout`. A reply whose id does
/// not match the request is rejected.
#[derive(Debug, Clone)]
pub struct UdpExchange {
    timeout: Duration,
}

impl UdpExchange {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_config(config: &FailoverConfig) -> Self {
        Self::new(Duration::from_millis(config.timeout_ms))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn bind_addr(server: SocketAddr) -> SocketAddr {
        if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

impl Default for UdpExchange {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn exchange(
        &self,
        request: &Message,
        server: SocketAddr,
    ) -> Result<Message, DomainError> {
        let message_bytes = request
            .to_vec()
            .map_err(|e| DomainError::EncodeError(e.to_string()))?;

        let socket = UdpSocket::bind(Self::bind_addr(server))
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.connect(server).await.map_err(|e| {
            DomainError::IoError(format!("Failed to connect UDP socket to {}: {}", server, e))
        })?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send(&message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout { server })?
            .map_err(|e| {
                DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout { server })?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to receive UDP response from {}: {}",
                    server, e
                ))
            })?;

        recv_buf.truncate(bytes_received);

        let response = Message::from_vec(&recv_buf).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if response.id() != request.id() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "id mismatch from {}: expected {}, got {}",
                server,
                request.id(),
                response.id()
            )));
        }

        debug!(
            server = %server,
            bytes_received = bytes_received,
            rcode = ?response.response_code(),
            "UDP response received"
        );

        Ok(response)
    }
}
