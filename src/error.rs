//! Error types for threatdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ThreatDbError
pub type Result<T> = std::result::Result<T, ThreatDbError>;

/// Unified error type for threatdb operations
///
/// Every error is fatal: nothing is retried, nothing is recovered. A run
/// that fails partway leaves a truncated output file behind; the next run
/// overwrites it from scratch.
#[derive(Debug, Error)]
pub enum ThreatDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Database Errors
    // -------------------------------------------------------------------------
    #[error("Database write failed: {0}")]
    Database(String),
}
