//! Insertion-ordered metadata map.

use std::collections::HashMap;

/// An insertion-ordered string map with last-write-wins key uniqueness.
///
/// Iteration yields entries in the order their keys were first inserted;
/// re-inserting an existing key replaces its value in place. Backed by an
/// entry list plus a key-to-slot index for O(1) lookups.
#[derive(Debug, Clone, Default)]
pub struct MetaMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MetaMap {
    /// Create a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a key/value pair, replacing the value of an existing key in
    /// place without changing its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> MetaMapIter<'_> {
        MetaMapIter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a MetaMap {
    type Item = (&'a str, &'a str);
    type IntoIter = MetaMapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over map entries in insertion order.
pub struct MetaMapIter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for MetaMapIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
