//! Core types for nsdb
//!
//! - Bucket: flat key → value map owned by one namespace
//! - Namespaces: namespace name → Bucket, the whole store
//! - Entry: immutable (key, value) pair used by bulk views

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Flat string-to-string mapping owned by a single namespace
pub type Bucket = HashMap<String, String>;

/// Namespace name → Bucket
///
/// This is the unit that gets snapshotted to disk.
pub type Namespaces = HashMap<String, Bucket>;

/// A single key/value pair
///
/// Ordering compares the key first, so sorting a `Vec<Entry>` taken from a
/// bucket yields key order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Key within the bucket
    pub key: String,
    /// Value stored under `key`
    pub value: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Borrow the key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into the owned (key, value) tuple
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
