use hickory_proto::op::Message;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A message carrying no question and no records in any section. Such an
/// entry is treated as absent and purged when touched.
pub fn is_empty_payload(message: &Message) -> bool {
    message.queries().is_empty()
        && message.answers().is_empty()
        && message.name_servers().is_empty()
        && message.additionals().is_empty()
}

/// Outcome of touching an entry on the read path.
#[derive(Debug)]
pub(crate) enum Touch {
    Fresh(Message),
    Expired,
    Empty,
}

struct EntryState {
    answer: Message,
    last_touched: u64,
}

/// Stored answer and the second it was last aged.
///
/// The lock covers this entry only; map membership is guarded by the store.
pub(crate) struct CacheEntry {
    state: Mutex<EntryState>,
}

impl CacheEntry {
    pub(crate) fn new(answer: Message, now_secs: u64) -> Self {
        Self {
            state: Mutex::new(EntryState {
                answer,
                last_touched: now_secs,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EntryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Age the stored answer by the seconds elapsed since it was last touched
    /// and move `last_touched` to `now_secs`.
    ///
    /// Touches within the same second see zero elapsed time and leave the
    /// TTLs alone.
    pub(crate) fn touch(&self, now_secs: u64) -> Touch {
        let mut state = self.lock();
        if is_empty_payload(&state.answer) {
            return Touch::Empty;
        }

        let elapsed = elapsed_secs(state.last_touched, now_secs);
        state.last_touched = now_secs;

        if state.answer.answers().iter().any(|r| elapsed > r.ttl()) {
            return Touch::Expired;
        }

        if elapsed > 0 {
            for record in state.answer.answers_mut() {
                let ttl = record.ttl();
                record.set_ttl(ttl - elapsed);
            }
        }

        Touch::Fresh(state.answer.clone())
    }

    /// Sweep check. Does not move `last_touched`.
    pub(crate) fn is_stale(&self, now_secs: u64) -> bool {
        let state = self.lock();
        if is_empty_payload(&state.answer) {
            return true;
        }

        let elapsed = elapsed_secs(state.last_touched, now_secs);
        state.answer.answers().iter().any(|r| elapsed > r.ttl())
    }

    pub(crate) fn last_touched(&self) -> u64 {
        self.lock().last_touched
    }
}

fn elapsed_secs(since: u64, now: u64) -> u32 {
    u32::try_from(now.saturating_sub(since)).unwrap_or(u32::MAX)
}
