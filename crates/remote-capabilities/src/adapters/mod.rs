//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod codec;

pub use codec::{CapabilityResponse, ProtoCapabilityResponseCodec};
