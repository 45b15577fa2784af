mod helpers;

use ferrous_responder_application::ports::DnsExchange;
use ferrous_responder_domain::DomainError;
use ferrous_responder_infrastructure::dns::UdpExchange;
use helpers::{MessageFixtures, MockBehavior, MockDnsServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RData;
use std::net::Ipv4Addr;
use std::time::Duration;

#[tokio::test]
async fn test_exchange_returns_decoded_reply() {
    let server = MockDnsServer::start(MockBehavior::Answer {
        ip: Ipv4Addr::new(192, 0, 2, 10),
        ttl: 60,
    })
    .await
    .unwrap();

    let exchange = UdpExchange::new(Duration::from_secs(2));
    let request = MessageFixtures::query(4242, "mock.example.");
    let response = exchange.exchange(&request, server.addr()).await.unwrap();

    assert_eq!(response.id(), 4242);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);
    assert_eq!(response.answers()[0].ttl(), 60);
    assert!(matches!(
        response.answers()[0].data(),
        Some(RData::A(a)) if a.0 == Ipv4Addr::new(192, 0, 2, 10)
    ));
    assert_eq!(server.queries(), 1);
}

#[tokio::test]
async fn test_exchange_times_out_on_silent_server() {
    let server = MockDnsServer::start(MockBehavior::Silent).await.unwrap();

    let exchange = UdpExchange::new(Duration::from_millis(100));
    let request = MessageFixtures::query(1, "quiet.example.");
    let err = exchange.exchange(&request, server.addr()).await.unwrap_err();

    assert!(matches!(err, DomainError::TransportTimeout { server: addr } if addr == server.addr()));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_exchange_rejects_mismatched_id() {
    let server = MockDnsServer::start(MockBehavior::WrongId).await.unwrap();

    let exchange = UdpExchange::new(Duration::from_secs(2));
    let request = MessageFixtures::query(100, "spoof.example.");
    let err = exchange.exchange(&request, server.addr()).await.unwrap_err();

    assert!(matches!(err, DomainError::InvalidDnsResponse(_)));
}

#[tokio::test]
async fn test_exchange_passes_servfail_through() {
    let server = MockDnsServer::start(MockBehavior::ServFail).await.unwrap();

    let exchange = UdpExchange::default();
    let request = MessageFixtures::query(7, "broken.example.");
    let response = exchange.exchange(&request, server.addr()).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::ServFail);
    assert!(response.recursion_desired());
}
