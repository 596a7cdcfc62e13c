//! # ThreatDB
//!
//! A synthetic threat-intelligence database generator with:
//! - Deterministic output from a fixed RNG seed
//! - Streaming writes with constant memory use
//! - Four pattern families: phone, domain, signature, metadata
//! - Size padding up to a configurable target
//!
//! ## Pipeline Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DbGenerator                             │
//! │                 (Config + seeded RNG)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┬──────────────┐
//!          │            │            │              │
//!          ▼            ▼            ▼              ▼
//!   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐
//!   │   Phone   │ │  Domain   │ │ Signature │ │ Metadata  │
//!   │ (PHONE:)  │ │ (DOMAIN:) │ │  (SIG:)   │ │  (META:)  │
//!   └─────┬─────┘ └─────┬─────┘ └─────┬─────┘ └─────┬─────┘
//!         │             │             │             │
//!         └─────────────┴──────┬──────┴─────────────┘
//!                              │
//!                              ▼
//!                      ┌─────────────┐
//!                      │  DbWriter   │
//!                      │ (BufWriter) │
//!                      └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod db;
pub mod patterns;
pub mod generator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ThreatDbError};
pub use config::Config;
pub use db::{DbSummary, DbWriter};
pub use generator::DbGenerator;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ThreatDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
