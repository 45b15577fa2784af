#![allow(dead_code)]
use hickory_proto::op::{Message, Query, ResponseCode};
use hickory_proto::rr::{rdata::A, Name, RData, Record, RecordType};
use std::str::FromStr;

/// Builders for the messages tests feed through caches and stages
pub struct MessageFixtures;

impl MessageFixtures {
    /// Recursive A query
    pub fn query(id: u16, name: &str) -> Message {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_recursion_desired(true)
            .add_query(Query::query(Name::from_str(name).unwrap(), RecordType::A));
        message
    }

    /// NOERROR answer with one A record per TTL
    pub fn answer(name: &str, ttls: &[u32]) -> Message {
        let owner = Name::from_str(name).unwrap();
        let mut message = Message::error_msg(0, hickory_proto::op::OpCode::Query, ResponseCode::NoError);
        message.add_query(Query::query(owner.clone(), RecordType::A));
        for (i, ttl) in ttls.iter().enumerate() {
            message.add_answer(Record::from_rdata(
                owner.clone(),
                *ttl,
                RData::A(A::new(198, 51, 100, i as u8 + 1)),
            ));
        }
        message
    }

    /// SERVFAIL reply to `query(id, name)`
    pub fn servfail(id: u16, name: &str) -> Message {
        let request = Self::query(id, name);
        let mut message =
            Message::error_msg(id, hickory_proto::op::OpCode::Query, ResponseCode::ServFail);
        message
            .add_queries(request.queries().iter().cloned())
            .set_recursion_desired(true);
        message
    }

    pub fn ttls(message: &Message) -> Vec<u32> {
        message.answers().iter().map(|r| r.ttl()).collect()
    }
}
