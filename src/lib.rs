//! nsdb - embedded namespaced key-value store
//!
//! A map of namespaces, each holding a flat string → string bucket, kept in
//! memory and optionally persisted as one snapshot file.
//!
//! # Quick Start
//!
//! ```no_run
//! use nsdb::{Bucket, Database, DatabaseConfig, Entry};
//!
//! # fn main() -> nsdb::Result<()> {
//! let (db, teardown) = Database::open(Some(DatabaseConfig::with_path("app.nsdb")))?;
//!
//! let mut settings = Bucket::new();
//! settings.insert("theme".to_string(), "dark".to_string());
//! db.set_bucket("settings", settings)?;
//! db.set_entries("settings", vec![Entry::new("lang", "en")])?;
//!
//! for entry in db.get_entries("settings")? {
//!     println!("{}", entry);
//! }
//!
//! db.save()?;
//! teardown.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `nsdb-core`: data model and errors
//! - `nsdb-storage`: the locked in-memory namespace map
//! - `nsdb-durability`: snapshot codec, snapshot file, configuration
//! - `nsdb-engine`: open/save/close lifecycle

pub use nsdb_core::{Bucket, Entry, Error, Namespaces, Result};
pub use nsdb_durability::{DatabaseConfig, SnapshotCodec};
pub use nsdb_engine::{Database, Teardown};
pub use nsdb_storage::NamespaceStore;
