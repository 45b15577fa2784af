#![allow(unused_imports)]

pub mod builders;
pub mod dns_server_mock;

pub use builders::MessageFixtures;
pub use dns_server_mock::{closed_port, MockBehavior, MockDnsServer};
