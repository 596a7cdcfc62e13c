//! Phishing domain patterns
//!
//! Emits `DOMAIN:` records shaped like credential-phishing hostnames: an
//! optional leading token such as `secure-`, a brand or keyword base
//! (sometimes with digit-for-letter substitutions), a numeric suffix, and a
//! throwaway-friendly TLD.

use rand::Rng;

use crate::db::{DbWriter, RecordKind};
use crate::error::Result;

use super::{DOMAIN_BASES, SUBDOMAIN_PREFIXES, TLDS};

/// Probability of applying homoglyph substitutions to the base token
const HOMOGLYPH_PROB: f64 = 0.2;

/// Numeric suffix bounds (inclusive)
const NUMERIC_SUFFIX_MIN: u32 = 1;
const NUMERIC_SUFFIX_MAX: u32 = 999;

/// Build one domain pattern: `{sub}{base}{n}{tld}`
pub fn pattern<R: Rng>(rng: &mut R) -> String {
    let base = super::pick(rng, &DOMAIN_BASES);
    let base = if rng.gen_bool(HOMOGLYPH_PROB) {
        homoglyph(base)
    } else {
        base.to_string()
    };

    let tld = super::pick(rng, &TLDS);
    let sub = super::pick(rng, &SUBDOMAIN_PREFIXES);
    let n = rng.gen_range(NUMERIC_SUFFIX_MIN..=NUMERIC_SUFFIX_MAX);

    format!("{}{}{}{}", sub, base, n, tld)
}

/// Write `count` domain records. Returns bytes written.
pub fn generate<R: Rng>(rng: &mut R, writer: &mut DbWriter, count: u64) -> Result<u64> {
    let mut written = 0;
    for _ in 0..count {
        written += writer.append(RecordKind::Domain, pattern(rng).as_bytes())?;
    }
    Ok(written)
}

/// Map a base token through the o→0, l→1, a→4 substitutions
fn homoglyph(base: &str) -> String {
    base.chars()
        .map(|c| match c {
            'o' => '0',
            'l' => '1',
            'a' => '4',
            other => other,
        })
        .collect()
}
