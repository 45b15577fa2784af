mod answer_cache;
mod clock;
mod dns_exchange;
mod response_writer;

pub use answer_cache::AnswerCache;
pub use clock::Clock;
pub use dns_exchange::DnsExchange;
pub use response_writer::{DnsHandler, ResponseWriter};
