//! # Shared Crypto - Peer Identity Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Peer identity, envelope signing |
//! | `hashing` | SHA-256 | Content digests for response grouping |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - **Identity = Key**: A peer's 32-byte identifier is its verifying key
//! - **SHA-256**: Used only as an equality key, never as a commitment

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{content_digest, ContentDigest, DIGEST_LENGTH};
pub use signatures::{
    verify_detached, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, PUBLIC_KEY_LENGTH,
    SIGNATURE_LENGTH,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
