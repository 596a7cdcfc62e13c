//! Pattern Generation Module
//!
//! The four record generators and the fixed vocabulary they sample from.
//!
//! ## Responsibilities
//! - Synthesize phone, domain, and signature payloads from fixed tables
//! - Fill leftover space with random padding blocks
//! - Stream everything through [`DbWriter`](crate::db::DbWriter), never
//!   buffering the record stream in memory
//!
//! All randomness is injected: each generator takes an explicit RNG
//! parameter, so a seeded [`StdRng`](rand::rngs::StdRng) reproduces a run
//! byte for byte. There is no global RNG state anywhere in the crate.

pub mod domain;
pub mod metadata;
pub mod phone;
pub mod signature;

use rand::seq::SliceRandom;
use rand::Rng;

// =============================================================================
// Fixed Vocabulary
// =============================================================================

/// Country-code prefixes for phone patterns. Repeated entries are
/// intentional: they weight the uniform choice toward those codes.
pub const COUNTRY_PREFIXES: [&str; 60] = [
    "234", "233", "225", "221", "880", "92", "91", "63", "855", "856",
    "95", "66", "84", "62", "60", "81", "82", "98", "966", "971",
    "20", "27", "254", "237", "212", "351", "34", "39", "33", "49",
    "31", "32", "48", "358", "353", "44", "61", "64", "65", "55",
    "52", "57", "58", "54", "51", "56", "46", "47", "421", "86",
    "7", "380", "90", "81", "82", "66", "84", "65", "60", "63",
];

/// Brand and keyword base tokens for domain patterns.
pub const DOMAIN_BASES: [&str; 28] = [
    "paypal", "amazon", "google", "microsoft", "apple", "netflix", "bank",
    "secure", "login", "verify", "account", "support", "official", "gov",
    "irs", "hmrc", "fedex", "ups", "dhl", "usps", "royal-mail", "customs",
    " bitcoin", "crypto", "wallet", "investment", "refund", "prize",
];

/// Top-level domains favored by throwaway phishing registrations.
pub const TLDS: [&str; 9] = [
    ".com", ".net", ".org", ".tk", ".ml", ".ga", ".xyz", ".top", ".click",
];

/// Optional leading tokens prepended to domain patterns.
pub const SUBDOMAIN_PREFIXES: [&str; 6] = [
    "", "secure-", "login-", "verify-", "account-", "support-",
];

/// Scam phrases hashed into signature records.
pub const SCAM_PHRASES: [&str; 21] = [
    "otp", "verification code", "account locked", "urgent", "click here",
    "congratulations", "you have won", "claim your", "free gift", "bank",
    "pay now", "send money", "wire transfer", "bitcoin", "crypto",
    "refund", "overcharge", "verify", "confirm", "suspended", "expires",
];

// =============================================================================
// Shared Helpers
// =============================================================================

/// Uniform choice from a fixed non-empty table
fn pick<R: Rng>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap()
}
