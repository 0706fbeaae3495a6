//! # Remote Capability Errors
//!
//! Error kinds for envelope authentication and response aggregation. Every
//! variant carries enough context (observed lengths, counts, identities) for
//! the caller to log or alert; nothing here is retried locally.

use super::message::MessageBody;
use super::peer::PeerId;
use thiserror::Error;

/// Why an inbound envelope was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The envelope or its body is not a valid encoding.
    #[error("failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    /// Sender or receiver field is not a peer id.
    #[error("invalid sender length ({sender_len}) or receiver length ({receiver_len})")]
    MalformedIdentity { sender_len: usize, receiver_len: usize },

    /// Signature does not verify against the claimed sender.
    #[error("failed to verify message signature")]
    InvalidSignature,

    /// Claimed author differs from the peer that delivered the message.
    ///
    /// Relaying is not supported: a peer may only deliver messages it authored.
    #[error("sender in message body ({claimed}) does not match sender of p2p message ({transport})")]
    RelayRejected { claimed: PeerId, transport: PeerId },

    /// Message is addressed to a different node.
    #[error("receiver in message body ({receiver}) does not match expected receiver ({expected})")]
    Misdirected { receiver: PeerId, expected: PeerId },
}

/// A rejected envelope together with whatever could be parsed from it.
///
/// `body` is `None` only for decode failures. For every later check it holds
/// the parsed body so the caller can log diagnostics without re-parsing; its
/// fields are untrusted and must not be acted upon.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{reason}")]
pub struct RejectedMessage {
    pub body: Option<MessageBody>,
    #[source]
    pub reason: ValidationError,
}

impl RejectedMessage {
    pub(crate) fn undecodable(reason: ValidationError) -> Self {
        Self { body: None, reason }
    }

    pub(crate) fn with_body(body: MessageBody, reason: ValidationError) -> Self {
        Self {
            body: Some(body),
            reason,
        }
    }
}

/// Why a set of responses could not be reduced to a single value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregationError {
    /// No response reached the identical-response floor.
    #[error(
        "not enough identical responses found: required {required}, best {best} of {total} responses"
    )]
    NoQuorum { required: u32, best: u32, total: usize },

    /// The winning response could not be decoded into a capability response.
    #[error("failed to decode aggregated response: {0}")]
    Decode(String),
}
