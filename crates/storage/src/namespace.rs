//! NamespaceStore: the in-memory namespace → bucket mapping
//!
//! This module guards the whole [`Namespaces`] map with a single
//! `parking_lot::RwLock`:
//! - Reads (`get_bucket`, `read_bucket`, `get_entries`) take the read lock
//! - Writes (`set_bucket`, `set_entries`, `delete_namespace`, `reset`) take
//!   the write lock
//! - `snapshot` hands out the read guard itself, so a save sees a
//!   consistent map and blocks writers (not readers) while it encodes
//!
//! # Design Notes
//!
//! - **Coarse locking**: one lock for every namespace. Operations on
//!   different namespaces serialise against each other.
//! - **Empty means absent**: a namespace whose bucket has no keys reads as
//!   `NotFound`, the same as one that was never written.
//! - **Aliasing**: `get_bucket` and `get_entries` return owned copies.
//!   `read_bucket` is the zero-copy view; it keeps the read lock held until
//!   the guard is dropped.

use std::collections::hash_map::Entry as MapEntry;

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use tracing::trace;

use nsdb_core::{Bucket, Entry, Error, Namespaces, Result};

/// Thread-safe namespaced key/value map
#[derive(Debug, Default)]
pub struct NamespaceStore {
    data: RwLock<Namespaces>,
}

impl NamespaceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with previously loaded contents
    pub fn from_namespaces(namespaces: Namespaces) -> Self {
        Self {
            data: RwLock::new(namespaces),
        }
    }

    /// Copy of the bucket for `namespace`
    ///
    /// # Errors
    ///
    /// `NotFound` when the namespace is absent or its bucket is empty.
    pub fn get_bucket(&self, namespace: &str) -> Result<Bucket> {
        let data = self.data.read();
        match data.get(namespace) {
            Some(bucket) if !bucket.is_empty() => Ok(bucket.clone()),
            _ => Err(Error::NotFound(namespace.to_string())),
        }
    }

    /// Live, borrowed view of the bucket for `namespace`
    ///
    /// The returned guard holds the store's read lock; writers block until
    /// it is dropped.
    pub fn read_bucket(&self, namespace: &str) -> Result<MappedRwLockReadGuard<'_, Bucket>> {
        RwLockReadGuard::try_map(self.data.read(), |data| {
            data.get(namespace).filter(|bucket| !bucket.is_empty())
        })
        .map_err(|_| Error::NotFound(namespace.to_string()))
    }

    /// Entries of `namespace` sorted by key
    ///
    /// The returned vector is a fresh copy and does not borrow the store.
    pub fn get_entries(&self, namespace: &str) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = {
            let data = self.data.read();
            match data.get(namespace) {
                Some(bucket) if !bucket.is_empty() => bucket
                    .iter()
                    .map(|(k, v)| Entry::new(k.as_str(), v.as_str()))
                    .collect(),
                _ => return Err(Error::NotFound(namespace.to_string())),
            }
        };
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Merge `mapping` into the bucket for `namespace`
    ///
    /// Existing keys are overwritten, new keys are added. An empty mapping
    /// leaves the store untouched.
    pub fn set_bucket(&self, namespace: &str, mapping: Bucket) -> Result<()> {
        if mapping.is_empty() {
            return Ok(());
        }
        let mut data = self.data.write();
        trace!(namespace, keys = mapping.len(), "set_bucket");
        Self::merge(&mut data, namespace, mapping);
        Ok(())
    }

    /// Merge a batch of entries into the bucket for `namespace`
    ///
    /// The batch is validated before the live bucket is touched: if any key
    /// appears twice the call fails with `DuplicateKey` and nothing is
    /// written.
    pub fn set_entries<I>(&self, namespace: &str, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut data = self.data.write();

        let mut batch = Bucket::new();
        for entry in entries {
            match batch.entry(entry.key) {
                MapEntry::Occupied(slot) => {
                    return Err(Error::DuplicateKey(slot.key().clone()));
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(entry.value);
                }
            }
        }

        if batch.is_empty() {
            return Ok(());
        }
        trace!(namespace, keys = batch.len(), "set_entries");
        Self::merge(&mut data, namespace, batch);
        Ok(())
    }

    /// Remove `namespace` and all of its keys
    ///
    /// Deleting a namespace that does not exist is a no-op.
    pub fn delete_namespace(&self, namespace: &str) -> Result<()> {
        let removed = self.data.write().remove(namespace);
        trace!(namespace, existed = removed.is_some(), "delete_namespace");
        Ok(())
    }

    /// Read-locked view of every namespace
    ///
    /// Used by the save path to encode a consistent snapshot. Writers block
    /// while the guard is alive; readers do not.
    pub fn snapshot(&self) -> RwLockReadGuard<'_, Namespaces> {
        self.data.read()
    }

    /// Replace the contents with an empty map, returning what was there
    pub fn reset(&self) -> Namespaces {
        std::mem::take(&mut *self.data.write())
    }

    /// Sorted names of all readable (non-empty) namespaces
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .data
            .read()
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Whether `namespace` would be found by `get_bucket`
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.data
            .read()
            .get(namespace)
            .is_some_and(|bucket| !bucket.is_empty())
    }

    /// Number of readable namespaces
    pub fn len(&self) -> usize {
        self.data
            .read()
            .values()
            .filter(|bucket| !bucket.is_empty())
            .count()
    }

    /// Whether no namespace is readable
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn merge(data: &mut Namespaces, namespace: &str, mapping: Bucket) {
        let bucket = data.entry(namespace.to_string()).or_default();
        bucket.extend(mapping);
    }
}
