//! Phone number patterns
//!
//! Emits `PHONE:` records: a country-code prefix followed by a 6-12 digit
//! suffix. A fraction of suffixes repeat a single digit, imitating the
//! low-entropy numbers bulk spam operations register in blocks.

use rand::Rng;

use crate::db::{DbWriter, RecordKind};
use crate::error::Result;

use super::COUNTRY_PREFIXES;

/// Probability that a suffix is one digit repeated
const REPEATED_DIGIT_PROB: f64 = 0.3;

/// Suffix length bounds (inclusive)
const SUFFIX_LEN_MIN: usize = 6;
const SUFFIX_LEN_MAX: usize = 12;

/// Build one phone pattern: country prefix + digit suffix
pub fn pattern<R: Rng>(rng: &mut R) -> String {
    let prefix = super::pick(rng, &COUNTRY_PREFIXES);
    let suffix_len = rng.gen_range(SUFFIX_LEN_MIN..=SUFFIX_LEN_MAX);

    let mut out = String::with_capacity(prefix.len() + suffix_len);
    out.push_str(prefix);

    if rng.gen_bool(REPEATED_DIGIT_PROB) {
        // Low-entropy spam number: same digit all the way
        let digit = random_digit(rng);
        for _ in 0..suffix_len {
            out.push(digit);
        }
    } else {
        for _ in 0..suffix_len {
            out.push(random_digit(rng));
        }
    }

    out
}

/// Write `count` phone records. Returns bytes written.
pub fn generate<R: Rng>(rng: &mut R, writer: &mut DbWriter, count: u64) -> Result<u64> {
    let mut written = 0;
    for _ in 0..count {
        written += writer.append(RecordKind::Phone, pattern(rng).as_bytes())?;
    }
    Ok(written)
}

fn random_digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}
