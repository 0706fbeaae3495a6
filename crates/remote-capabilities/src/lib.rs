//! # Remote Capabilities
//!
//! Trust-and-consensus layer for nodes exchanging capability requests over
//! the peer-to-peer network.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Envelope authentication, mode aggregation
//!   and identifier checks, no I/O
//! - **Ports Layer** (`ports/`): `Aggregator`, `MessageAuthenticationApi`,
//!   `CapabilityResponseCodec`
//! - **Adapters Layer** (`adapters/`): Protobuf capability response codec
//! - **Service Layer** (`service.rs`): Wires domain logic to ports, logs
//!
//! ## Flow
//!
//! ```text
//! transport ──P2pMessage──→ MessageAuthenticator ──MessageBody──→ dispatcher
//!                                                                    │
//!           peers' responses (collected by the caller) ←─────────────┘
//!                      │
//!                      ↓
//!           DefaultModeAggregator ──agreed bytes──→ CapabilityResponseCodec
//! ```
//!
//! ## Security Notes
//!
//! - **Signed Bytes**: Signatures cover the body bytes exactly as carried
//! - **No Relaying**: The body sender must be the transport-level sender
//! - **All-or-Nothing Quorum**: Aggregation never returns a best-effort value
//! - **Log Safety**: Untrusted strings are sanitised before logging
//!
//! Response collection, timeouts and retries belong to the caller.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::codec::{CapabilityResponse, ProtoCapabilityResponseCodec};
pub use config::{ConfigError, RemoteCapabilitiesConfig};
pub use domain::aggregation::aggregate_mode_raw;
pub use domain::errors::{AggregationError, RejectedMessage, ValidationError};
pub use domain::identifiers::{
    is_valid_id, is_valid_workflow_or_execution_id, sanitize_log_string, MAX_ID_LEN,
    MAX_LOGGED_STRING_LEN, VALID_WORKFLOW_ID_LEN,
};
pub use domain::message::{
    message_body, Envelope, ErrorCode, MessageBody, P2pMessage, TriggerEventMetadata,
    TriggerRegistrationMetadata,
};
pub use domain::peer::{to_peer_id, PeerId, PeerIdParseError, PEER_ID_LENGTH};
pub use domain::validation::{seal_message, validate_message};
pub use ports::inbound::{Aggregator, MessageAuthenticationApi};
pub use ports::outbound::CapabilityResponseCodec;
pub use service::{DefaultModeAggregator, MessageAuthenticator};
