#![allow(dead_code)]
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{rdata::A, RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock replies to each query
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// NOERROR with one A record
    Answer { ip: Ipv4Addr, ttl: u32 },
    /// SERVFAIL with the question echoed
    ServFail,
    /// Reply with a different message id
    WrongId,
    /// Read the query and never answer
    Silent,
}

/// Mock DNS server for tests
///
/// Listens on an ephemeral localhost port and answers according to its
/// [`MockBehavior`]. Stops when dropped.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::Relaxed);
                            if let Some(response) = Self::build_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Queries received so far
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;

        let response = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::ServFail => {
                let mut response =
                    Message::error_msg(request.id(), request.op_code(), ResponseCode::ServFail);
                response
                    .add_queries(request.queries().iter().cloned())
                    .set_recursion_desired(request.recursion_desired());
                response
            }
            MockBehavior::WrongId => {
                Message::error_msg(request.id().wrapping_add(1), request.op_code(), ResponseCode::NoError)
            }
            MockBehavior::Answer { ip, ttl } => {
                let mut response =
                    Message::error_msg(request.id(), request.op_code(), ResponseCode::NoError);
                response
                    .add_queries(request.queries().iter().cloned())
                    .set_recursion_desired(request.recursion_desired())
                    .set_recursion_available(true);
                if let Some(question) = request.queries().first() {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        ttl,
                        RData::A(A::from(ip)),
                    ));
                }
                response
            }
        };

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// An address on which nothing listens: bind, read the port, release it.
pub async fn closed_port() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}
