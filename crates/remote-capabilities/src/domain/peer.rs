//! # Peer Identity
//!
//! A peer is identified by its 32-byte Ed25519 verifying key. The transport
//! layer establishes this identity for every connection; the wire body carries
//! it again as raw bytes, which is why conversions here work on slices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a peer identifier in bytes (an Ed25519 public key).
pub const PEER_ID_LENGTH: usize = shared_crypto::PUBLIC_KEY_LENGTH;

/// Fixed-length peer identifier, doubling as the peer's public key.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerId([u8; PEER_ID_LENGTH]);

impl PeerId {
    /// Wrap raw identity bytes.
    pub const fn new(bytes: [u8; PEER_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw identity bytes.
    pub fn as_bytes(&self) -> &[u8; PEER_ID_LENGTH] {
        &self.0
    }

    /// Exact-length conversion; `None` unless `bytes` is [`PEER_ID_LENGTH`] long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    /// Whether every byte is zero (the unset identity).
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Lowercase hex rendering used in logs and configuration.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Copy wire bytes into a [`PeerId`].
///
/// Shorter input is zero-padded and longer input is truncated. Only call this
/// on bytes whose length has already been checked (a validated message body);
/// use [`PeerId::from_slice`] when the length is untrusted.
pub fn to_peer_id(bytes: &[u8]) -> PeerId {
    let mut id = [0u8; PEER_ID_LENGTH];
    let n = bytes.len().min(PEER_ID_LENGTH);
    id[..n].copy_from_slice(&bytes[..n]);
    PeerId(id)
}

impl From<[u8; PEER_ID_LENGTH]> for PeerId {
    fn from(bytes: [u8; PEER_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<shared_crypto::Ed25519PublicKey> for PeerId {
    fn from(key: shared_crypto::Ed25519PublicKey) -> Self {
        Self(*key.as_bytes())
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({})", self.to_hex())
    }
}

/// Error parsing a hex-encoded [`PeerId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeerIdParseError {
    /// Input is not valid hex.
    #[error("invalid hex in peer id: {0}")]
    InvalidHex(String),

    /// Decoded input has the wrong length.
    #[error("invalid peer id length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl FromStr for PeerId {
    type Err = PeerIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| PeerIdParseError::InvalidHex(e.to_string()))?;
        PeerId::from_slice(&bytes).ok_or(PeerIdParseError::InvalidLength {
            expected: PEER_ID_LENGTH,
            actual: bytes.len(),
        })
    }
}

impl Serialize for PeerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
