//! Generator Module
//!
//! The pipeline that produces a database file end-to-end.
//!
//! ## Responsibilities
//! - Create the output directory and the database writer
//! - Run the four phases in fixed order: phone → domain → signature → metadata
//! - Pad the file up to the configured target size
//! - Report per-phase progress
//!
//! ## Sizing
//! The three structured phases run at their configured record counts, which
//! are independent of the target size. Only the metadata phase derives its
//! budget from `target - written`, so the final file size is an
//! approximation of the target: padding fills any shortfall, and an
//! overshoot from oversized counts is left as-is.

use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::db::{DbSummary, DbWriter};
use crate::error::Result;
use crate::patterns::{domain, metadata, phone, signature};

/// Drives one end-to-end database build
///
/// Fully single-threaded: one pass over the output file with a single RNG.
/// Each call to [`run`](Self::run) starts over from a truncated file.
pub struct DbGenerator {
    /// Build configuration
    config: Config,
}

impl DbGenerator {
    /// Create a generator with the given config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the database file
    ///
    /// Steps:
    /// 1. Create parent directories for the output path
    /// 2. Seed the run RNG (fixed seed → byte-identical output)
    /// 3. Write header, then the three structured phases at their counts
    /// 4. Pad with metadata blocks if the target is not yet reached
    /// 5. Flush, sync, and return the summary
    pub fn run(&self) -> Result<DbSummary> {
        let config = &self.config;

        // Step 1: Make sure the output directory exists
        if let Some(parent) = config.output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Step 2: One RNG drives every phase; StdRng is a CSPRNG, so the
        // metadata phase's CryptoRng bound is satisfied too
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!("Generating threat intelligence database");
        tracing::info!("Target size: {:.0} MB", mb(config.target_size_bytes));
        tracing::info!("Output: {}", config.output_path.display());

        // Step 3: Header + structured phases, in fixed order
        let mut writer = DbWriter::create(&config.output_path)?;

        phone::generate(&mut rng, &mut writer, config.phone_count)?;
        tracing::info!(
            "Phone patterns: {} entries, ~{:.0} MB total",
            config.phone_count,
            mb(writer.bytes_written())
        );

        domain::generate(&mut rng, &mut writer, config.domain_count)?;
        tracing::info!(
            "Domain patterns: {} entries, ~{:.0} MB total",
            config.domain_count,
            mb(writer.bytes_written())
        );

        signature::generate(&mut rng, &mut writer, config.signature_count)?;
        tracing::info!(
            "Phrase signatures: {} entries, ~{:.0} MB total",
            config.signature_count,
            mb(writer.bytes_written())
        );

        // Step 4: Pad up to the target; skipped entirely when the structured
        // phases already overshot it
        let remaining = config
            .target_size_bytes
            .saturating_sub(writer.bytes_written());
        if remaining > 0 {
            metadata::generate(&mut rng, &mut writer, remaining)?;
            tracing::info!("Metadata blocks: ~{:.0} MB", mb(remaining));
        }

        // Step 5: Flush and sync
        let summary = writer.finish()?;
        tracing::info!("Done. Database size: {:.1} MB", mb(summary.file_size));

        Ok(summary)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Bytes → megabytes, for progress output
fn mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
