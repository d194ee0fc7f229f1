//! Database: lifecycle of a namespaced store
//!
//! Ties the in-memory [`NamespaceStore`] to an optional [`SnapshotFile`]:
//!
//! 1. `open` loads the snapshot (file-backed) or starts empty (in-memory)
//! 2. callers read and write namespaces through the store's lock
//! 3. `save` encodes a read-locked view and overwrites the file
//! 4. `close` saves, syncs and releases the file, then empties the store
//!
//! # Locking
//!
//! The file handle sits behind its own mutex. `save` and `close` take it
//! before the store lock, so a save racing a close either finishes first or
//! finds the handle gone and does nothing.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{MappedRwLockReadGuard, Mutex};
use tracing::{debug, info};

use nsdb_core::{Bucket, Entry, Namespaces, Result};
use nsdb_durability::{DatabaseConfig, SnapshotFile};
use nsdb_storage::NamespaceStore;

use crate::teardown::Teardown;

/// An open namespaced key/value database
#[derive(Debug)]
pub struct Database {
    config: DatabaseConfig,
    store: NamespaceStore,
    file: Mutex<Option<SnapshotFile>>,
    open: AtomicBool,
}

impl Database {
    /// Open a database
    ///
    /// `None` uses [`DatabaseConfig::default`], the in-memory configuration.
    /// With a path configured the snapshot file is created if missing and
    /// loaded; if loading fails the file handle is closed before the error
    /// is returned.
    ///
    /// # Example
    ///
    /// ```text
    /// let (db, teardown) = Database::open(Some(DatabaseConfig::with_path("app.nsdb")))?;
    /// db.set_bucket("settings", bucket)?;
    /// teardown.run()?;
    /// ```
    pub fn open(config: Option<DatabaseConfig>) -> Result<(Arc<Self>, Teardown)> {
        let config = config.unwrap_or_default();

        let (namespaces, file) = match config.path() {
            Some(path) => {
                let mut file = SnapshotFile::open(path)?;
                // On error `file` is dropped here, closing the handle.
                let namespaces = file.load()?;
                (namespaces, Some(file))
            }
            None => (Namespaces::new(), None),
        };

        info!(
            path = %config.path.display(),
            persistent = config.is_persistent(),
            namespaces = namespaces.len(),
            "Database opened"
        );

        let db = Arc::new(Database {
            config,
            store: NamespaceStore::from_namespaces(namespaces),
            file: Mutex::new(file),
            open: AtomicBool::new(true),
        });
        let teardown = Teardown::new(Arc::clone(&db));
        Ok((db, teardown))
    }

    /// Open a volatile, in-memory database
    pub fn open_in_memory() -> Result<(Arc<Self>, Teardown)> {
        Self::open(None)
    }

    /// Open a file-backed database at `path`
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<(Arc<Self>, Teardown)> {
        Self::open(Some(DatabaseConfig::with_path(path.as_ref())))
    }

    /// Configuration this database was opened with
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Whether the database was opened with a backing file
    pub fn is_persistent(&self) -> bool {
        self.config.is_persistent()
    }

    /// False once `close` has completed
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Write the full snapshot to the backing file
    ///
    /// No-op in in-memory mode and after close. Writers block for the
    /// duration of the encode; readers do not.
    pub fn save(&self) -> Result<()> {
        let mut file = self.file.lock();
        match file.as_mut() {
            Some(file) => {
                let snapshot = self.store.snapshot();
                file.save(&snapshot)?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Save, sync and close the backing file, then empty the store
    ///
    /// Closing an already closed database succeeds without doing anything
    /// further. If the save fails the file stays open and the store keeps
    /// its contents.
    pub fn close(&self) -> Result<()> {
        let mut file = self.file.lock();

        if let Some(open_file) = file.as_mut() {
            let snapshot = self.store.snapshot();
            open_file.save(&snapshot)?;
        }
        if let Some(open_file) = file.take() {
            open_file.sync_and_close()?;
        }

        let previous = self.store.reset();
        if self.open.swap(false, Ordering::SeqCst) {
            info!(
                path = %self.config.path.display(),
                namespaces = previous.len(),
                "Database closed"
            );
        } else {
            debug!("Database already closed");
        }
        Ok(())
    }

    /// Copy of the bucket for `namespace`
    pub fn get_bucket(&self, namespace: &str) -> Result<Bucket> {
        self.store.get_bucket(namespace)
    }

    /// Live view of the bucket for `namespace`; holds the read lock
    pub fn read_bucket(&self, namespace: &str) -> Result<MappedRwLockReadGuard<'_, Bucket>> {
        self.store.read_bucket(namespace)
    }

    /// Entries of `namespace` sorted by key
    pub fn get_entries(&self, namespace: &str) -> Result<Vec<Entry>> {
        self.store.get_entries(namespace)
    }

    /// Merge `mapping` into `namespace`
    pub fn set_bucket(&self, namespace: &str, mapping: Bucket) -> Result<()> {
        self.store.set_bucket(namespace, mapping)
    }

    /// Merge a duplicate-free batch of entries into `namespace`
    pub fn set_entries<I>(&self, namespace: &str, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = Entry>,
    {
        self.store.set_entries(namespace, entries)
    }

    /// Remove `namespace`; no-op if absent
    pub fn delete_namespace(&self, namespace: &str) -> Result<()> {
        self.store.delete_namespace(namespace)
    }

    /// Sorted names of all non-empty namespaces
    pub fn namespaces(&self) -> Vec<String> {
        self.store.namespaces()
    }

    /// Whether `namespace` exists and has at least one key
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.store.contains_namespace(namespace)
    }
}
