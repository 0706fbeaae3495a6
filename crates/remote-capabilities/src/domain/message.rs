//! # Wire Messages
//!
//! Protobuf types exchanged between capability peers. Field numbers are part
//! of the fleet-wide contract and must never be renumbered:
//!
//! ```text
//! Envelope (wire name `Message`)
//! ├── signature = 1   Ed25519 signature over `body`, verbatim
//! └── body      = 2   encoded MessageBody
//! ```
//!
//! The signature always covers the `body` bytes exactly as carried in the
//! envelope. Re-encoding a decoded [`MessageBody`] is not guaranteed to
//! reproduce them, so verification never re-serialises.

use super::peer::PeerId;

/// Outer signed wire structure.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Envelope {
    /// Ed25519 signature by `body.sender` over `body`.
    #[prost(bytes = "vec", tag = "1")]
    pub signature: Vec<u8>,
    /// Encoded [`MessageBody`].
    #[prost(bytes = "vec", tag = "2")]
    pub body: Vec<u8>,
}

/// Inner message body.
///
/// Only `sender` and `receiver` are interpreted by the authentication layer;
/// everything else is protocol payload for the dispatcher above it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageBody {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    /// Author identity; must be [`PEER_ID_LENGTH`](super::peer::PEER_ID_LENGTH) bytes.
    #[prost(bytes = "vec", tag = "2")]
    pub sender: Vec<u8>,
    /// Addressee identity; must be [`PEER_ID_LENGTH`](super::peer::PEER_ID_LENGTH) bytes.
    #[prost(bytes = "vec", tag = "3")]
    pub receiver: Vec<u8>,
    /// Unix milliseconds at the sender.
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
    /// Scoped to the sender.
    #[prost(bytes = "vec", tag = "5")]
    pub message_id: Vec<u8>,
    #[prost(string, tag = "6")]
    pub capability_id: String,
    #[prost(uint32, tag = "7")]
    pub capability_don_id: u32,
    #[prost(uint32, tag = "8")]
    pub caller_don_id: u32,
    #[prost(string, tag = "9")]
    pub method: String,
    #[prost(enumeration = "ErrorCode", tag = "10")]
    pub error: i32,
    #[prost(string, tag = "11")]
    pub error_msg: String,
    /// Encoded capability request or response.
    #[prost(bytes = "vec", tag = "12")]
    pub payload: Vec<u8>,
    #[prost(oneof = "message_body::Metadata", tags = "13, 14")]
    pub metadata: Option<message_body::Metadata>,
}

/// Nested types for [`MessageBody`].
pub mod message_body {
    /// Method-specific metadata.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Metadata {
        #[prost(message, tag = "13")]
        TriggerRegistrationMetadata(super::TriggerRegistrationMetadata),
        #[prost(message, tag = "14")]
        TriggerEventMetadata(super::TriggerEventMetadata),
    }
}

/// Remote error code carried in [`MessageBody::error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    ValidationFailed = 1,
    CapabilityNotFound = 2,
    InvalidRequest = 3,
    Timeout = 4,
    InternalError = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TriggerRegistrationMetadata {
    #[prost(string, tag = "1")]
    pub last_received_event_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TriggerEventMetadata {
    #[prost(string, tag = "1")]
    pub trigger_event_id: String,
    #[prost(string, repeated, tag = "2")]
    pub workflow_ids: Vec<String>,
}

impl MessageBody {
    /// Sender as a [`PeerId`], or `None` if the field has the wrong length.
    pub fn sender_peer_id(&self) -> Option<PeerId> {
        PeerId::from_slice(&self.sender)
    }

    /// Receiver as a [`PeerId`], or `None` if the field has the wrong length.
    pub fn receiver_peer_id(&self) -> Option<PeerId> {
        PeerId::from_slice(&self.receiver)
    }
}

/// A raw message as handed over by the P2P transport.
///
/// `sender` is the identity the transport authenticated for the connection,
/// independent of anything claimed inside `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P2pMessage {
    pub sender: PeerId,
    /// Encoded [`Envelope`].
    pub payload: Vec<u8>,
}

impl P2pMessage {
    pub fn new(sender: PeerId, payload: Vec<u8>) -> Self {
        Self { sender, payload }
    }
}
