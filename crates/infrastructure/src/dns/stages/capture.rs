use async_trait::async_trait;
use ferrous_responder_application::ports::ResponseWriter;
use ferrous_responder_domain::DomainError;
use hickory_proto::op::Message;

/// Writer that keeps every message written to it.
#[derive(Debug, Default)]
pub struct CaptureWriter {
    messages: Vec<Message>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Last message written, if any.
    pub fn into_last(mut self) -> Option<Message> {
        self.messages.pop()
    }
}

#[async_trait]
impl ResponseWriter for CaptureWriter {
    async fn write_msg(&mut self, msg: Message) -> Result<(), DomainError> {
        self.messages.push(msg);
        Ok(())
    }
}
