/// Source of the current time, truncated to whole seconds since the UNIX
/// epoch. Injected into the cache so tests can drive time explicitly.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}
