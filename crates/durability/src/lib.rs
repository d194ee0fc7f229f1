//! Durability layer for nsdb
//!
//! This crate handles everything that touches disk:
//!
//! - Snapshot codec: framed, checksummed bincode encoding of every namespace
//! - Snapshot file: open / load / save / sync of the single backing file
//! - Database configuration: in-memory vs file-backed, TOML loading

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod snapshot_file;

pub use codec::{
    SnapshotCodec, SNAPSHOT_HEADER_SIZE, SNAPSHOT_MAGIC, SNAPSHOT_TRAILER_SIZE, SNAPSHOT_VERSION_1,
};
pub use config::DatabaseConfig;
pub use snapshot_file::SnapshotFile;
