// Keycase Transform Module
// Renames keys through the shared cache, one key or a whole structure at a time

pub mod deep;

use std::sync::Arc;

use crate::cache::KeyCache;
use crate::value::{Key, Symbol};
use crate::Convention;

#[allow(deprecated)]
pub use deep::legacy_underscore;

/// Key transformer backed by a memoization cache
///
/// Cloning a `KeyTransform` shares its cache, so one instance can be handed
/// to every serializer in a process and each distinct key is only inflected
/// once per convention.
#[derive(Debug, Clone, Default)]
pub struct KeyTransform {
    cache: Arc<KeyCache>,
}

impl KeyTransform {
    /// Create a transformer with its own empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer over an existing cache
    pub fn with_cache(cache: Arc<KeyCache>) -> Self {
        Self { cache }
    }

    /// The cache this transformer reads and fills
    pub fn cache(&self) -> &Arc<KeyCache> {
        &self.cache
    }

    /// Rename a single identifier
    ///
    /// # Examples
    /// ```
    /// use keycase_core::{Convention, KeyTransform};
    /// let transform = KeyTransform::new();
    /// assert_eq!(transform.convert_identifier("some_key", Convention::CamelLower), "someKey");
    /// ```
    pub fn convert_identifier(&self, identifier: &str, convention: Convention) -> String {
        if convention.is_unaltered() {
            return identifier.to_string();
        }
        self.cached(identifier, convention).to_string()
    }

    /// Rename a mapping key, keeping its kind
    ///
    /// String keys stay strings and symbols stay symbols. Integer keys are
    /// not identifiers and pass through untouched.
    pub fn transform_key(&self, key: Key, convention: Convention) -> Key {
        if convention.is_unaltered() {
            return key;
        }
        match key {
            Key::String(s) => {
                let converted = self.cached(&s, convention);
                if *converted == *s {
                    Key::String(s)
                } else {
                    Key::String(converted.to_string())
                }
            }
            Key::Symbol(sym) => Key::Symbol(Symbol::from(self.cached(sym.as_str(), convention))),
            index @ Key::Index(_) => index,
        }
    }

    // String and symbol keys with the same text share one cache entry
    fn cached(&self, identifier: &str, convention: Convention) -> Arc<str> {
        self.cache
            .fetch(identifier, convention, || convention.apply(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_identifier() {
        let transform = KeyTransform::new();
        assert_eq!(transform.convert_identifier("SomeKey", Convention::Underscore), "some_key");
        assert_eq!(transform.convert_identifier("some_key", Convention::Camel), "SomeKey");
        assert_eq!(transform.convert_identifier("some_key", Convention::CamelLower), "someKey");
        assert_eq!(transform.convert_identifier("some_key", Convention::Dash), "some-key");
        assert_eq!(transform.convert_identifier("some-key", Convention::Underscore), "some_key");
    }

    #[test]
    fn test_unaltered_bypasses_cache() {
        let transform = KeyTransform::new();
        assert_eq!(transform.convert_identifier("Some-Key", Convention::Unaltered), "Some-Key");
        assert_eq!(
            transform.transform_key(Key::from("Some-Key"), Convention::Unaltered),
            Key::from("Some-Key")
        );
        assert!(transform.cache().is_empty());
    }

    #[test]
    fn test_transform_key_keeps_kind() {
        let transform = KeyTransform::new();
        assert_eq!(
            transform.transform_key(Key::from("user_name"), Convention::Camel),
            Key::from("UserName")
        );
        assert_eq!(
            transform.transform_key(Key::symbol("user_name"), Convention::Dash),
            Key::symbol("user-name")
        );
        assert_eq!(
            transform.transform_key(Key::from(5i64), Convention::Camel),
            Key::from(5i64)
        );
    }

    #[test]
    fn test_string_and_symbol_share_cache_entry() {
        let transform = KeyTransform::new();
        transform.transform_key(Key::from("user_name"), Convention::Camel);
        transform.transform_key(Key::symbol("user_name"), Convention::Camel);

        let stats = transform.cache().stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_clones_share_cache() {
        let transform = KeyTransform::new();
        let other = transform.clone();
        other.convert_identifier("first_name", Convention::Camel);
        assert!(Arc::ptr_eq(transform.cache(), other.cache()));
        assert_eq!(transform.cache().len(), 1);
    }

    #[test]
    fn test_with_cache() {
        let cache = Arc::new(KeyCache::new());
        let a = KeyTransform::with_cache(cache.clone());
        let b = KeyTransform::with_cache(cache.clone());
        a.convert_identifier("some_key", Convention::Dash);
        b.convert_identifier("some_key", Convention::Dash);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
    }
}
