//! Storage layer for nsdb
//!
//! This crate implements the in-memory store:
//! - NamespaceStore: namespace → bucket map behind one `parking_lot::RwLock`
//!
//! Persistence lives in `nsdb-durability`; this crate never touches disk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod namespace;

pub use namespace::NamespaceStore;
