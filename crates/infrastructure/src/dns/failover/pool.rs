use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

const DEFAULT_MAX_IDLE: usize = 64;

/// Per-query scratch state of the failover writer.
#[derive(Debug, Default)]
pub struct InterceptContext {
    /// `name CLASS TYPE` of the question being retried
    pub label: String,
    /// Fallback exchanges attempted for this query
    pub attempts: u32,
}

impl InterceptContext {
    fn reset(&mut self) {
        self.label.clear();
        self.attempts = 0;
    }
}

/// Reuse pool of [`InterceptContext`]s.
///
/// A context is held by exactly one in-flight query. It goes back to the
/// pool, reset, when its [`PooledContext`] guard drops.
pub struct WriterPool {
    idle: Mutex<Vec<InterceptContext>>,
    max_idle: usize,
    outstanding: AtomicUsize,
}

impl WriterPool {
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
            outstanding: AtomicUsize::new(0),
        }
    }

    fn idle_list(&self) -> MutexGuard<'_, Vec<InterceptContext>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn acquire(&self) -> PooledContext<'_> {
        let ctx = self.idle_list().pop().unwrap_or_default();
        self.outstanding.fetch_add(1, Ordering::Relaxed);

        PooledContext { pool: self, ctx }
    }

    fn release(&self, mut ctx: InterceptContext) {
        ctx.reset();
        self.outstanding.fetch_sub(1, Ordering::Relaxed);

        let mut idle = self.idle_list();
        if idle.len() < self.max_idle {
            idle.push(ctx);
        }
    }

    /// Contexts currently held by in-flight queries
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Contexts waiting for reuse
    pub fn idle(&self) -> usize {
        self.idle_list().len()
    }
}

impl Default for WriterPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

/// Scoped hold on a pooled context. Released on drop.
pub struct PooledContext<'a> {
    pool: &'a WriterPool,
    ctx: InterceptContext,
}

impl Deref for PooledContext<'_> {
    type Target = InterceptContext;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl DerefMut for PooledContext<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ctx
    }
}

impl Drop for PooledContext<'_> {
    fn drop(&mut self) {
        let ctx = std::mem::take(&mut self.ctx);
        self.pool.release(ctx);
    }
}
