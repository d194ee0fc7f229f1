//! Snapshot file driver
//!
//! Owns the single backing file of a file-backed database:
//! - `open`: create if absent, open read+write
//! - `load`: initialise an empty file with an empty snapshot, then decode
//! - `save`: overwrite at offset zero and truncate to the new length
//! - `sync_and_close`: fsync and release the handle
//!
//! Every save rewrites the whole file. There is no log and no temp file.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use nsdb_core::{Namespaces, Result};

use crate::codec::SnapshotCodec;

/// Open handle on a snapshot file
#[derive(Debug)]
pub struct SnapshotFile {
    file: File,
    path: PathBuf,
}

impl SnapshotFile {
    /// Open `path` for read/write, creating the file (and any missing
    /// parent directories) if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path this handle was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file
    ///
    /// A zero-length file is first initialised with an encoded empty map
    /// and synced, so it always holds a well-formed snapshot afterwards.
    pub fn load(&mut self) -> Result<Namespaces> {
        if self.file.metadata()?.len() == 0 {
            debug!(path = %self.path.display(), "Initialising empty snapshot file");
            let bytes = SnapshotCodec::encode(&Namespaces::new())?;
            self.write_from_start(&bytes)?;
            self.file.sync_all()?;
        }

        self.file.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf)?;

        SnapshotCodec::decode(&buf).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Snapshot failed to decode");
            e
        })
    }

    /// Encode `namespaces` and overwrite the file with it
    ///
    /// The file is truncated to the encoded length, so a smaller snapshot
    /// never leaves stale bytes behind. Returns the number of bytes written.
    pub fn save(&mut self, namespaces: &Namespaces) -> Result<u64> {
        let bytes = SnapshotCodec::encode(namespaces)?;
        self.write_from_start(&bytes)?;
        let len = bytes.len() as u64;
        self.file.set_len(len)?;
        self.file.flush()?;

        debug!(path = %self.path.display(), bytes = len, namespaces = namespaces.len(), "Snapshot saved");
        Ok(len)
    }

    /// Force written bytes to stable storage and close the handle
    pub fn sync_and_close(self) -> Result<()> {
        self.file.sync_all()?;
        drop(self.file);
        Ok(())
    }

    fn write_from_start(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(bytes)?;
        Ok(())
    }
}
