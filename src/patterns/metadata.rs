//! Metadata padding blocks
//!
//! Emits `META:` records of random bytes until a byte budget is consumed.
//! A full record (tag + payload + newline) comes to exactly [`BLOCK_SIZE`]
//! bytes; the final block's payload is truncated to the leftover budget, so
//! the phase can run past the budget by at most the per-record overhead.
//!
//! Payloads must come from a cryptographically secure source, which the
//! `CryptoRng` bound enforces at the call site.

use rand::{CryptoRng, RngCore};

use crate::db::{DbWriter, RecordKind};
use crate::error::Result;

/// Total on-disk size of a full `META:` record
pub const BLOCK_SIZE: usize = 4096;

/// Tag + newline overhead per record
pub const BLOCK_OVERHEAD: usize = 6;

/// Maximum payload carried by one block
pub const MAX_PAYLOAD_SIZE: usize = BLOCK_SIZE - BLOCK_OVERHEAD;

/// Write padding records until at least `remaining` bytes are consumed
///
/// Returns bytes written, which lands in
/// `remaining..=remaining + BLOCK_OVERHEAD`: padding only ever adds, it
/// never trims an overshoot from earlier phases.
pub fn generate<R: RngCore + CryptoRng>(
    rng: &mut R,
    writer: &mut DbWriter,
    remaining: u64,
) -> Result<u64> {
    let mut written = 0u64;
    let mut payload = vec![0u8; MAX_PAYLOAD_SIZE];

    while written < remaining {
        let take = (MAX_PAYLOAD_SIZE as u64).min(remaining - written) as usize;
        rng.fill_bytes(&mut payload[..take]);
        written += writer.append(RecordKind::Metadata, &payload[..take])?;
    }

    Ok(written)
}
