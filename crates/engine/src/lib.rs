//! Database engine for nsdb
//!
//! This crate orchestrates the lower layers:
//! - Database: open/save/close sequencing over storage + durability
//! - Teardown: handle returned by `open` that closes the database
//!
//! The engine is the only component that knows about both the in-memory
//! store and the backing file.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod teardown;

pub use database::Database;
pub use teardown::Teardown;
