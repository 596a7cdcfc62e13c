//! Database Writer
//!
//! Streams records to a new database file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::ThreatDbError;

use super::{DbSummary, RecordKind, HEADER_SIZE, MAGIC};

/// Writer for creating a new threat database file
///
/// Writes the header immediately; call [`append`](Self::append) for each
/// record, then [`finish`](Self::finish) to flush and sync. The file is
/// write-only output: nothing is ever read back or validated.
pub struct DbWriter {
    /// Output file path
    path: std::path::PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Bytes accounted so far (header included)
    bytes_written: u64,
    /// Records appended so far
    record_count: u64,
}

impl DbWriter {
    /// Create a new database file, truncating any existing file at `path`
    ///
    /// The header (magic + zero-filled reserved field) is written up front,
    /// so a fresh writer already accounts [`HEADER_SIZE`] bytes.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_all(&0u64.to_le_bytes())?; // Reserved field, never populated

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            bytes_written: HEADER_SIZE,
            record_count: 0,
        })
    }

    /// Append one record: `tag + payload + newline`
    ///
    /// Returns the on-disk size of the record just written.
    pub fn append(&mut self, kind: RecordKind, payload: &[u8]) -> Result<u64> {
        self.writer.write_all(kind.tag())?;
        self.writer.write_all(payload)?;
        self.writer.write_all(b"\n")?;

        let len = kind.record_len(payload.len());
        self.bytes_written += len;
        self.record_count += 1;

        Ok(len)
    }

    /// Bytes accounted so far, header included
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Records appended so far
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Finish writing: flush, sync to disk, and return file metadata
    pub fn finish(mut self) -> Result<DbSummary> {
        self.writer.flush()?;

        let file = self.writer.into_inner().map_err(|e| {
            ThreatDbError::Database(format!("Failed to flush database file: {}", e))
        })?;
        file.sync_all()?;

        let file_size = file.metadata()?.len();

        Ok(DbSummary {
            path: self.path,
            record_count: self.record_count,
            bytes_written: self.bytes_written,
            file_size,
        })
    }
}
