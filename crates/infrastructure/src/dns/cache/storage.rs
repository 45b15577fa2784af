use super::entry::{CacheEntry, Touch};
use super::{CacheKey, CacheMetrics};
use ferrous_responder_application::ports::{AnswerCache, Clock};
use ferrous_responder_domain::config::CacheConfig;
use ferrous_responder_domain::CacheError;
use hickory_proto::op::Message;
use rustc_hash::FxHashMap;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

type Store = FxHashMap<CacheKey, Arc<CacheEntry>>;

/// In-memory answer cache.
///
/// One reader/writer lock guards map membership: `get`, `exists` and `len`
/// share it, `set`, `remove` and `sweep` take it exclusively. Each entry
/// carries its own lock for TTL aging, so concurrent reads of one key
/// serialize their decrement. `get` hands out a copy of the aged answer.
pub struct MemoryCache {
    store: RwLock<Store>,
    max_entries: usize,
    clock: Arc<dyn Clock>,
    metrics: Arc<CacheMetrics>,
}

impl MemoryCache {
    /// `max_entries == 0` means unbounded.
    pub fn new(max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        info!(max_entries = max_entries, "Initializing answer cache");

        Self {
            store: RwLock::new(FxHashMap::with_capacity_and_hasher(
                max_entries,
                Default::default(),
            )),
            max_entries,
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn from_config(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(config.max_entries, clock)
    }

    fn read_store(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_full(&self) -> bool {
        self.max_entries > 0 && self.len() >= self.max_entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Second at which `key` was last aged, if present.
    pub fn last_touched(&self, key: &str) -> Option<u64> {
        let key = CacheKey::new(key);
        self.read_store().get(&key).map(|entry| entry.last_touched())
    }

    /// Coarse pass over the whole store: drops empty entries and entries
    /// whose time since last touch exceeds any record TTL. Survivors keep
    /// their `last_touched`. Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now_secs();

        let mut store = self.write_store();
        let before = store.len();
        store.retain(|_, entry| !entry.is_stale(now));
        let removed = before - store.len();
        let remaining = store.len();
        drop(store);

        self.metrics.sweeps.fetch_add(1, AtomicOrdering::Relaxed);
        self.metrics
            .swept
            .fetch_add(removed as u64, AtomicOrdering::Relaxed);

        if removed > 0 {
            debug!(
                removed = removed,
                cache_size = remaining,
                "Cache sweep completed"
            );
        }

        removed
    }

    /// Remove `key` only if it still maps to `entry`: a `set` racing with
    /// the read path must not be undone.
    fn purge(&self, key: &CacheKey, entry: &Arc<CacheEntry>) {
        let mut store = self.write_store();
        if store
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, entry))
        {
            store.remove(key);
        }
    }
}

impl AnswerCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Message, CacheError> {
        let key = CacheKey::new(key);

        let entry = self.read_store().get(&key).cloned();
        let Some(entry) = entry else {
            debug!(key = %key, "Cache miss");
            self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
            return Err(CacheError::NotFound {
                key: key.as_str().to_string(),
            });
        };

        match entry.touch(self.clock.now_secs()) {
            Touch::Fresh(answer) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Ok(answer)
            }
            Touch::Empty => {
                self.purge(&key, &entry);
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                Err(CacheError::NotFound {
                    key: key.as_str().to_string(),
                })
            }
            Touch::Expired => {
                debug!(key = %key, "Cache expired");
                self.purge(&key, &entry);
                self.metrics
                    .expirations
                    .fetch_add(1, AtomicOrdering::Relaxed);
                Err(CacheError::Expired {
                    key: key.as_str().to_string(),
                })
            }
        }
    }

    fn set(&self, key: &str, answer: Message) -> Result<(), CacheError> {
        let key = CacheKey::new(key);
        let entry = Arc::new(CacheEntry::new(answer, self.clock.now_secs()));

        let mut store = self.write_store();
        if self.max_entries > 0 && store.len() >= self.max_entries && !store.contains_key(&key)
        {
            drop(store);
            self.metrics
                .rejected_full
                .fetch_add(1, AtomicOrdering::Relaxed);
            debug!(key = %key, max_entries = self.max_entries, "Cache full, insert rejected");
            return Err(CacheError::Full);
        }

        store.insert(key, entry);
        drop(store);

        self.metrics
            .insertions
            .fetch_add(1, AtomicOrdering::Relaxed);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        let key = CacheKey::new(key);
        self.read_store().contains_key(&key)
    }

    fn remove(&self, key: &str) {
        let key = CacheKey::new(key);
        self.write_store().remove(&key);
    }

    fn len(&self) -> usize {
        self.read_store().len()
    }
}
