pub mod hash_map;

pub use hash_map::{Entries, HashMap};

/// Read-only view of a key-value container
///
/// Callers that only need lookups can be handed `&dyn ReadMap<K, V>`.
pub trait ReadMap<K, V> {
    /// Number of distinct keys currently stored
    fn count(&self) -> usize;

    /// Look up `key` without modifying the map
    fn try_get(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Mutable view of a key-value container
pub trait MutableMap<K, V>: ReadMap<K, V> {
    /// Insert or replace the value for `key`
    ///
    /// Returns the replaced value, if any. Replacing does not change
    /// `count()`.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn clear(&mut self);
}

/// Options for constructing a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub initial_capacity: usize, // Entries to reserve up front
}
