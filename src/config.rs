//! Configuration for threatdb
//!
//! Centralized configuration with sensible defaults. The defaults reproduce
//! the stock database build: 750 MB target, 2.5M phone patterns, 2.5M domain
//! patterns, 6.5M phrase signatures, padding for the rest.

use std::path::PathBuf;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "ml/src/main/assets/threat_intelligence_database.bin";

/// Default target database size: 750 MB.
pub const DEFAULT_TARGET_SIZE_BYTES: u64 = 750 * 1024 * 1024;

/// Default phone pattern count (~200 MB of records).
pub const DEFAULT_PHONE_COUNT: u64 = 2_500_000;

/// Default domain pattern count (~200 MB of records).
pub const DEFAULT_DOMAIN_COUNT: u64 = 2_500_000;

/// Default phrase signature count (~130 MB of records).
pub const DEFAULT_SIGNATURE_COUNT: u64 = 6_500_000;

/// Main configuration for a database build
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Where the database file is written. Parent directories are created if
    /// absent; an existing file at this path is truncated without asking.
    pub output_path: PathBuf,

    /// Nominal total size of the output file. The metadata phase pads up to
    /// this value; if the structured phases already exceed it, the file ends
    /// up larger and no padding is written.
    pub target_size_bytes: u64,

    // -------------------------------------------------------------------------
    // Phase Record Counts
    // -------------------------------------------------------------------------
    /// Number of `PHONE:` records.
    pub phone_count: u64,

    /// Number of `DOMAIN:` records.
    pub domain_count: u64,

    /// Number of `SIG:` records.
    pub signature_count: u64,

    // -------------------------------------------------------------------------
    // Randomness
    // -------------------------------------------------------------------------
    /// Seed for the run's random number generator. `None` seeds from OS
    /// entropy; a fixed seed makes the output byte-for-byte reproducible.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target_size_bytes: DEFAULT_TARGET_SIZE_BYTES,
            phone_count: DEFAULT_PHONE_COUNT,
            domain_count: DEFAULT_DOMAIN_COUNT,
            signature_count: DEFAULT_SIGNATURE_COUNT,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the output file path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the nominal total file size (in bytes)
    pub fn target_size_bytes(mut self, bytes: u64) -> Self {
        self.config.target_size_bytes = bytes;
        self
    }

    /// Set the number of phone pattern records
    pub fn phone_count(mut self, count: u64) -> Self {
        self.config.phone_count = count;
        self
    }

    /// Set the number of domain pattern records
    pub fn domain_count(mut self, count: u64) -> Self {
        self.config.domain_count = count;
        self
    }

    /// Set the number of phrase signature records
    pub fn signature_count(mut self, count: u64) -> Self {
        self.config.signature_count = count;
        self
    }

    /// Set the RNG seed (None = seed from OS entropy)
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
