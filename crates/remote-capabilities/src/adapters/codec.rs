//! # Protobuf Capability Response Codec
//!
//! Default [`CapabilityResponseCodec`] for the fleet's `CapabilityResponse`
//! message. The response value is an encoded map owned by the capability
//! runtime; it is carried here as opaque length-delimited bytes, which is
//! wire-identical to the embedded message.

use crate::ports::outbound::CapabilityResponseCodec;
use prost::Message;

/// Structured capability response.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CapabilityResponse {
    /// Encoded value map, opaque to this layer.
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
    /// Execution error reported by the capability, empty on success.
    #[prost(string, tag = "2")]
    pub error: String,
}

/// Decodes [`CapabilityResponse`] protobuf bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoCapabilityResponseCodec;

impl CapabilityResponseCodec for ProtoCapabilityResponseCodec {
    type Response = CapabilityResponse;
    type Error = prost::DecodeError;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Response, Self::Error> {
        CapabilityResponse::decode(bytes)
    }
}
