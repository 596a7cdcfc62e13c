//! Database File Module
//!
//! The threat database is a single append-only binary file: a fixed header
//! followed by tagged records until EOF. There is no index and no end-of-file
//! marker; the OS file length is the only framing.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (25 bytes)                                            │
//! │   Magic: "DFS_THREAT_DB_V1\0" (17) | Reserved: u64 LE (8)    │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Records (variable, until EOF)                                │
//! │   [Tag][Payload][\n]                                         │
//! │   PHONE:  digit string                                       │
//! │   DOMAIN: hostname-like string                               │
//! │   SIG:    16-byte digest prefix                              │
//! │   META:   up to 4090 bytes of random padding                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reserved header field is always written as zero. Readers must not
//! interpret it; it is a placeholder carried over from format version 1.

mod record;
mod writer;

use std::path::PathBuf;

pub use record::RecordKind;
pub use writer::DbWriter;

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a threat database file, format version 1
pub const MAGIC: &[u8; 17] = b"DFS_THREAT_DB_V1\x00";

/// Header size: Magic (17) + Reserved u64 (8) = 25 bytes
pub const HEADER_SIZE: u64 = 25;

// =============================================================================
// Database Summary
// =============================================================================

/// Metadata for a completed database file.
///
/// Returned by [`DbWriter::finish`]. The record count lives only here, in
/// memory; the file's reserved header field stays zero.
#[derive(Debug, Clone)]
pub struct DbSummary {
    /// Path to the database file
    pub path: PathBuf,
    /// Number of records written (all kinds)
    pub record_count: u64,
    /// Bytes accounted by the writer (header + records)
    pub bytes_written: u64,
    /// File size on disk after sync
    pub file_size: u64,
}
