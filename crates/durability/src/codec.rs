//! Snapshot codec
//!
//! Encodes the whole [`Namespaces`] map into one self-describing frame and
//! back again.
//!
//! ## Frame layout
//!
//! ```text
//! +----------------+-------------+---------------+-------------------+-----------+
//! | Magic (8)      | Version (4) | PayloadLen (8)| Payload (bincode) | CRC32 (4) |
//! +----------------+-------------+---------------+-------------------+-----------+
//! ```
//!
//! All integers are little-endian. The CRC covers the payload only. Bytes
//! after the CRC are ignored so a file written by an older non-truncating
//! writer still decodes.

use nsdb_core::{Error, Namespaces, Result};

/// Magic bytes at the start of every snapshot
pub const SNAPSHOT_MAGIC: &[u8; 8] = b"NSDBSNAP";

/// Snapshot format version 1
pub const SNAPSHOT_VERSION_1: u32 = 1;

/// Header size: Magic(8) + Version(4) + PayloadLen(8)
pub const SNAPSHOT_HEADER_SIZE: usize = 20;

/// Trailer size: CRC32(4)
pub const SNAPSHOT_TRAILER_SIZE: usize = 4;

/// Encoder/decoder for whole-store snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotCodec;

impl SnapshotCodec {
    /// Encode every namespace into a single frame
    pub fn encode(namespaces: &Namespaces) -> Result<Vec<u8>> {
        let payload = bincode::serialize(namespaces)?;

        let mut buf =
            Vec::with_capacity(SNAPSHOT_HEADER_SIZE + payload.len() + SNAPSHOT_TRAILER_SIZE);
        buf.extend_from_slice(SNAPSHOT_MAGIC);
        buf.extend_from_slice(&SNAPSHOT_VERSION_1.to_le_bytes());
        buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        buf.extend_from_slice(&payload);
        buf.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        Ok(buf)
    }

    /// Decode a frame produced by [`SnapshotCodec::encode`]
    ///
    /// # Errors
    ///
    /// `CorruptSnapshot` on bad magic, unknown version, truncated data,
    /// checksum mismatch, or a payload bincode cannot read.
    pub fn decode(data: &[u8]) -> Result<Namespaces> {
        if data.len() < SNAPSHOT_HEADER_SIZE + SNAPSHOT_TRAILER_SIZE {
            return Err(corrupt(format!(
                "too short: expected at least {} bytes, got {}",
                SNAPSHOT_HEADER_SIZE + SNAPSHOT_TRAILER_SIZE,
                data.len()
            )));
        }

        if &data[0..8] != SNAPSHOT_MAGIC {
            return Err(corrupt(format!("invalid magic {:?}", &data[0..8])));
        }

        let version = u32::from_le_bytes(le_array(&data[8..12]));
        if version != SNAPSHOT_VERSION_1 {
            return Err(corrupt(format!("unsupported version {}", version)));
        }

        let payload_len = u64::from_le_bytes(le_array(&data[12..20]));
        let available = (data.len() - SNAPSHOT_HEADER_SIZE - SNAPSHOT_TRAILER_SIZE) as u64;
        if payload_len > available {
            return Err(corrupt(format!(
                "truncated payload: header claims {} bytes, {} available",
                payload_len, available
            )));
        }

        let payload_end = SNAPSHOT_HEADER_SIZE + payload_len as usize;
        let payload = &data[SNAPSHOT_HEADER_SIZE..payload_end];
        let stored_crc = u32::from_le_bytes(le_array(
            &data[payload_end..payload_end + SNAPSHOT_TRAILER_SIZE],
        ));
        let computed_crc = crc32fast::hash(payload);
        if stored_crc != computed_crc {
            return Err(corrupt(format!(
                "checksum mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, computed_crc
            )));
        }

        bincode::deserialize(payload).map_err(|e| corrupt(format!("payload: {}", e)))
    }
}

fn corrupt(msg: String) -> Error {
    Error::CorruptSnapshot(msg)
}

/// Copy a slice whose length the caller has already checked into an array
fn le_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
