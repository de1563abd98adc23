//! Persistent string-keyed map with structural sharing.
//!
//! A thin wrapper around the `im` crate's persistent hash map, holding
//! the string-keyed mappings the mapping-pattern demonstrations match
//! over.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::Value;

/// Persistent map from string keys to [`Value`]s.
///
/// Cloning is O(1). Modifications return a new map sharing structure
/// with the original.
#[derive(Clone, Default)]
pub struct ValueMap(im::HashMap<Arc<str>, Value>);

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Gets a value by key, or fails with a key-not-found error.
    ///
    /// # Errors
    /// Returns an error if the key has no entry.
    pub fn fetch(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a new map with the key-value pair inserted.
    #[must_use]
    pub fn insert(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let mut new = self.0.clone();
        new.insert(key.into(), value.into());
        Self(new)
    }

    /// Returns a new map with the key removed.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        let mut new = self.0.clone();
        new.remove(key);
        Self(new)
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.0.iter()
    }

    /// Returns an iterator over keys.
    pub fn keys(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.keys()
    }

    /// Returns an iterator over values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ValueMap {}

impl Hash for ValueMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // Note: This is order-dependent which is not ideal for maps,
        // but im::HashMap doesn't guarantee order anyway
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
