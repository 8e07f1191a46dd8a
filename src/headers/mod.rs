//! HTTP Header Multimap.
use std::fmt;

mod iter;

pub use iter::{GetAll, Iter};


/// HTTP Headers Multimap.
///
/// Entries are kept in first-seen order, keyed by the exact casing under
/// which a name first appears. Lookup is exact-match: `get("Host")` and
/// `get("host")` address different entries.
#[derive(Clone, Default)]
pub struct HeaderMap {
    entries: Vec<Entry>,
}

#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct header names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains a value under the exact `name`.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Returns the first value under the exact `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    /// Returns an iterator over the values under the exact `name`, in
    /// insertion order.
    pub fn get_all(&self, name: &str) -> GetAll<'_> {
        GetAll::new(self.entry(name))
    }

    /// Append `value` under `name`.
    ///
    /// A name seen for the first time is stored under the given casing, at
    /// the end of the map; later appends under the exact same casing push
    /// onto that entry's value sequence. Existing values are never
    /// overwritten.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.values.push(value.into()),
            None => self.entries.push(Entry {
                name,
                values: vec![value.into()],
            }),
        }
    }

    /// Returns an iterator over all `(name, value)` pairs, entries in
    /// first-seen order and values in insertion order within each entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in &self.entries {
            map.entry(&entry.name, &entry.values);
        }
        map.finish()
    }
}
