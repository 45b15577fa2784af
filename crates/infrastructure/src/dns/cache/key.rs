use hickory_proto::op::Query;
use std::borrow::Borrow;
use std::fmt;

/// Case-folded cache key.
///
/// Two keys that differ only by case always collide. Callers that key by
/// question use [`CacheKey::from_query`], which folds in type and class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(Box<str>);

impl CacheKey {
    #[inline]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase().into_boxed_str())
    }

    pub fn from_query(query: &Query) -> Self {
        Self::new(&format!(
            "{}|{}|{}",
            query.name(),
            query.query_type(),
            query.query_class()
        ))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
