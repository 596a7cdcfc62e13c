//! ThreatDB Generator Binary
//!
//! Builds the synthetic threat intelligence database file.

use clap::Parser;
use threatdb::{Config, DbGenerator};
use tracing_subscriber::{fmt, EnvFilter};

/// ThreatDB Generator
#[derive(Parser, Debug)]
#[command(name = "threatdb-gen")]
#[command(about = "Synthetic threat intelligence database generator")]
#[command(version)]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = threatdb::config::DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Target database size in MB
    #[arg(short, long, default_value = "750")]
    target_mb: u64,

    /// Number of phone pattern records
    #[arg(long, default_value = "2500000")]
    phone_count: u64,

    /// Number of domain pattern records
    #[arg(long, default_value = "2500000")]
    domain_count: u64,

    /// Number of phrase signature records
    #[arg(long, default_value = "6500000")]
    signature_count: u64,

    /// RNG seed for reproducible output (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,threatdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("ThreatDB Generator v{}", threatdb::VERSION);

    // Build config from args
    let config = Config::builder()
        .output_path(&args.output)
        .target_size_bytes(args.target_mb * 1024 * 1024)
        .phone_count(args.phone_count)
        .domain_count(args.domain_count)
        .signature_count(args.signature_count)
        .seed(args.seed)
        .build();

    // Run the build
    let generator = DbGenerator::new(config);
    let summary = match generator.run() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Database generation failed: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "{} records written to {}",
        summary.record_count,
        summary.path.display()
    );
}
