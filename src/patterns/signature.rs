//! Scam phrase signatures
//!
//! Emits `SIG:` records holding the first 16 bytes of the SHA-256 digest of
//! a synthetic scam phrase. Storing only the digest prefix keeps records at
//! a fixed 21 bytes: 4-byte tag, 16-byte digest, newline.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::db::{DbWriter, RecordKind};
use crate::error::Result;

use super::SCAM_PHRASES;

/// Digest prefix length stored per signature
pub const SIGNATURE_LEN: usize = 16;

/// Numeric phrase suffix bounds (inclusive)
const PHRASE_SUFFIX_MIN: u32 = 1000;
const PHRASE_SUFFIX_MAX: u32 = 99_999;

/// Truncated SHA-256 digest of a phrase
pub fn digest(phrase: &str) -> [u8; SIGNATURE_LEN] {
    let hash = Sha256::digest(phrase.as_bytes());
    let mut prefix = [0u8; SIGNATURE_LEN];
    prefix.copy_from_slice(&hash[..SIGNATURE_LEN]);
    prefix
}

/// Build one signature: digest of a random phrase plus numeric suffix
pub fn sample<R: Rng>(rng: &mut R) -> [u8; SIGNATURE_LEN] {
    let phrase = format!(
        "{}_{}",
        super::pick(rng, &SCAM_PHRASES),
        rng.gen_range(PHRASE_SUFFIX_MIN..=PHRASE_SUFFIX_MAX)
    );
    digest(&phrase)
}

/// Write `count` signature records. Returns bytes written.
pub fn generate<R: Rng>(rng: &mut R, writer: &mut DbWriter, count: u64) -> Result<u64> {
    let mut written = 0;
    for _ in 0..count {
        written += writer.append(RecordKind::Signature, &sample(rng))?;
    }
    Ok(written)
}
