//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies this subsystem needs from the outside.

use std::fmt::Display;

/// Decoder for structured capability responses.
///
/// The aggregation layer treats the response format as opaque: it only hands
/// the agreed bytes to this codec.
pub trait CapabilityResponseCodec: Send + Sync {
    /// Decoded response type.
    type Response;

    /// Decode failure, surfaced as
    /// [`AggregationError::Decode`](crate::domain::errors::AggregationError::Decode).
    type Error: Display;

    /// Decode one encoded response.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Response, Self::Error>;
}
