//! Channel map — the key-value context shared with later pipeline stages.
//!
//! The host owns the map; the transform only receives it as `&mut dyn ChannelMap`
//! for the duration of one call. Later stages read values back by key.

use indexmap::IndexMap;
use serde::Serialize;

/// Host-provided key-value store visible to downstream stages.
///
/// Writes are last-write-wins per key.
pub trait ChannelMap {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
}

/// In-process [`ChannelMap`] that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryChannelMap {
    entries: IndexMap<String, String>,
}

impl MemoryChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowing lookup, for callers that hold the concrete type.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ChannelMap for MemoryChannelMap {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
