//! # SHA-256 Content Digests
//!
//! Digests used to group byte-identical payloads cheaply. Correctness of the
//! callers depends on collision rarity only, not on preimage resistance.

use sha2::{Digest, Sha256};

/// Length of a content digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// SHA-256 digest of a payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; DIGEST_LENGTH]);

impl ContentDigest {
    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentDigest({})", self.to_hex())
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash data with SHA-256 (one-shot).
#[inline]
pub fn content_digest(data: &[u8]) -> ContentDigest {
    let result = Sha256::digest(data);
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    ContentDigest(output)
}
