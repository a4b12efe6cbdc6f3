//! Insertion-ordered mapping keyed by run.
//!
//! Run order reconstructs the input, so every run-keyed result is stored in
//! a [`RunMap`] rather than a hash map.

use std::slice;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A small insertion-ordered map from run key to value.
///
/// Re-inserting an existing key replaces its value in place and keeps the
/// key's first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> RunMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        RunMap {
            entries: Vec::new(),
        }
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<V> Default for RunMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RunMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RunMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> IntoIterator for &'a RunMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for RunMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for RunMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut map = RunMap::new();
        map.insert("2", 1);
        map.insert("1", 2);
        map.insert("3", 3);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["2", "1", "3"]);
        assert_eq!(map.get("1"), Some(&2));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut map = RunMap::new();
        map.insert("22", "a");
        map.insert("1", "b");
        assert_eq!(map.insert("22", "c"), Some("a"));

        let entries: Vec<(&str, &&str)> = map.iter().collect();
        assert_eq!(entries, vec![("22", &"c"), ("1", &"b")]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let map: RunMap<Vec<&str>> = vec![("9", vec!["W"]), ("1", vec!["1"])]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"9":["W"],"1":["1"]}"#);
    }
}
