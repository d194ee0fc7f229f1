//! Core types and errors for nsdb
//!
//! This crate defines the foundational types shared by every layer:
//! - Bucket / Namespaces: the in-memory data model
//! - Entry: key/value pair for bulk reads and writes
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Bucket, Entry, Namespaces};
