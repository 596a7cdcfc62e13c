//! Record kind definitions
//!
//! Every record in the database file is `tag + payload + newline`. The tag
//! is the only type information a record carries.

/// Record kinds, in the order their phases run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `PHONE:` record, a country prefix plus digit suffix
    Phone,

    /// `DOMAIN:` record, a synthesized phishing hostname
    Domain,

    /// `SIG:` record, a truncated SHA-256 digest of a scam phrase
    Signature,

    /// `META:` record, an opaque random padding block
    Metadata,
}

impl RecordKind {
    /// Leading type label written before the payload
    pub fn tag(&self) -> &'static [u8] {
        match self {
            RecordKind::Phone => b"PHONE:",
            RecordKind::Domain => b"DOMAIN:",
            RecordKind::Signature => b"SIG:",
            RecordKind::Metadata => b"META:",
        }
    }

    /// On-disk size of a record with the given payload length
    pub fn record_len(&self, payload_len: usize) -> u64 {
        (self.tag().len() + payload_len + 1) as u64
    }
}
