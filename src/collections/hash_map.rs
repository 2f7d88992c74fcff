use std::{borrow::Borrow, collections::hash_map, fmt, hash::Hash};

use rustc_hash::FxHashMap;

use crate::{
    collections::{MapOptions, MutableMap, ReadMap},
    iterator::Iterator,
    util::Pair,
};

/// Hash map keyed by value equality
///
/// Two keys that compare equal (and hash equally) always land on the same
/// entry, regardless of where they were constructed. Backed by
/// `FxHashMap` for fast hashing of small keys.
pub struct HashMap<K, V> {
    map: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V> HashMap<K, V> {
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    pub fn with_options(options: MapOptions) -> Self {
        HashMap {
            map: FxHashMap::with_capacity_and_hasher(options.initial_capacity, Default::default()),
        }
    }

    /// Look up by any borrowed form of the key (e.g. `&str` for `String`)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get_mut(key)
    }

    /// Pipeline over all entries, in unspecified order
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.map.iter(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}

impl<K: Eq + Hash, V> ReadMap<K, V> for HashMap<K, V> {
    fn count(&self) -> usize {
        self.map.len()
    }

    fn try_get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }
}

impl<K: Eq + Hash, V> MutableMap<K, V> for HashMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: Eq + Hash, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for HashMap<K, V> {
    fn clone(&self) -> Self {
        HashMap {
            map: self.map.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

/// Later pairs overwrite earlier ones with an equal key
impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Entries of a `HashMap` as `Pair(&key, &value)`
pub struct Entries<'a, K, V> {
    inner: hash_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = Pair<&'a K, &'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| Pair::new(k, v))
    }
}
