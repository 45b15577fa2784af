//! DNS Message Builder
//!
//! Constructs the few messages this layer originates itself: the retry
//! query sent to fallback servers and the SERVFAIL reply used when the
//! primary upstream cannot be reached.

use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query, ResponseCode};
use std::fmt::Write;

/// UDP payload size advertised through EDNS0 on retry queries
pub const DEFAULT_MSG_SIZE: u16 = 1232;

/// Builds DNS messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query sent to fallback servers.
    ///
    /// Creates a recursive query with:
    /// - Random ID
    /// - The question's name and type (class IN)
    /// - EDNS0 advertising [`DEFAULT_MSG_SIZE`] with DO set
    /// - RD set, CD copied from the failed response
    pub fn build_retry_query(question: &Query, checking_disabled: bool) -> Message {
        let mut edns = Edns::new();
        edns.set_max_payload(DEFAULT_MSG_SIZE);
        edns.set_dnssec_ok(true);

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .set_checking_disabled(checking_disabled)
            .add_query(Query::query(question.name().clone(), question.query_type()))
            .set_edns(edns);

        message
    }

    /// Build a SERVFAIL reply to `request`, echoing its question and flags.
    pub fn servfail_for(request: &Message) -> Message {
        let mut response =
            Message::error_msg(request.id(), request.op_code(), ResponseCode::ServFail);
        response
            .add_queries(request.queries().iter().cloned())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_checking_disabled(request.checking_disabled());

        response
    }

    /// Human-readable `name CLASS TYPE` label for logs, written into `buf`.
    pub fn write_question_label(buf: &mut String, question: &Query) {
        buf.clear();
        let _ = write!(
            buf,
            "{} {} {}",
            question.name().to_string().to_lowercase(),
            question.query_class(),
            question.query_type()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::{DNSClass, Name, RecordType};
    use std::str::FromStr;

    fn question() -> Query {
        Query::query(Name::from_str("Example.com.").unwrap(), RecordType::AAAA)
    }

    #[test]
    fn test_retry_query_shape() {
        let message = MessageBuilder::build_retry_query(&question(), true);

        assert_eq!(message.message_type(), MessageType::Query);
        assert!(message.recursion_desired());
        assert!(message.checking_disabled());
        assert_eq!(message.queries().len(), 1);
        assert_eq!(message.queries()[0].query_type(), RecordType::AAAA);
        assert_eq!(message.queries()[0].query_class(), DNSClass::IN);

        let edns = message.extensions().as_ref().expect("EDNS0 present");
        assert_eq!(edns.max_payload(), DEFAULT_MSG_SIZE);
        assert!(edns.dnssec_ok());
    }

    #[test]
    fn test_retry_query_copies_checking_disabled() {
        let message = MessageBuilder::build_retry_query(&question(), false);
        assert!(!message.checking_disabled());
    }

    #[test]
    fn test_servfail_echoes_request() {
        let mut request = Message::new();
        request
            .set_id(4242)
            .set_recursion_desired(true)
            .add_query(question());

        let response = MessageBuilder::servfail_for(&request);
        assert_eq!(response.id(), 4242);
        assert_eq!(response.message_type(), MessageType::Response);
        assert_eq!(response.response_code(), ResponseCode::ServFail);
        assert!(response.recursion_desired());
        assert_eq!(response.queries(), request.queries());
    }

    #[test]
    fn test_question_label() {
        let mut label = String::from("stale");
        MessageBuilder::write_question_label(&mut label, &question());
        assert_eq!(label, "example.com. IN AAAA");
    }
}
