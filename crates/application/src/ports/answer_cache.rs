use ferrous_responder_domain::CacheError;
use hickory_proto::op::Message;

/// The complete contract calling stages use to reach an answer cache.
///
/// Keys are compared case-insensitively. `get` ages the stored answer: the
/// returned TTLs reflect the time elapsed since the entry was last touched.
pub trait AnswerCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Message, CacheError>;

    fn set(&self, key: &str, answer: Message) -> Result<(), CacheError>;

    fn exists(&self, key: &str) -> bool;

    /// Idempotent: removing an absent key is not an error.
    fn remove(&self, key: &str);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
