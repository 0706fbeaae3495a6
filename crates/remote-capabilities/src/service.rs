//! # Remote Capabilities Service
//!
//! Application services implementing the inbound ports.
//!
//! ## Architecture
//!
//! - [`MessageAuthenticator`] binds envelope validation to the local identity
//! - [`DefaultModeAggregator`] wraps mode aggregation with a response codec
//!
//! Both are immutable after construction and can be shared across tasks
//! without locking. Logging happens here, never in the domain layer, and
//! every untrusted string goes through
//! [`sanitize_log_string`](crate::domain::identifiers::sanitize_log_string).

use crate::config::RemoteCapabilitiesConfig;
use crate::domain::aggregation::aggregate_mode_raw;
use crate::domain::errors::{AggregationError, RejectedMessage};
use crate::domain::identifiers::sanitize_log_string;
use crate::domain::message::{MessageBody, P2pMessage};
use crate::domain::peer::PeerId;
use crate::domain::validation::validate_message;
use crate::ports::inbound::{Aggregator, MessageAuthenticationApi};
use crate::ports::outbound::CapabilityResponseCodec;
use tracing::{debug, warn};

// =============================================================================
// MESSAGE AUTHENTICATION
// =============================================================================

/// Authenticates inbound envelopes for one local node.
#[derive(Debug, Clone)]
pub struct MessageAuthenticator {
    local_peer_id: PeerId,
}

impl MessageAuthenticator {
    pub fn new(local_peer_id: PeerId) -> Self {
        Self { local_peer_id }
    }

    pub fn from_config(config: &RemoteCapabilitiesConfig) -> Self {
        Self::new(config.local_peer_id)
    }
}

impl MessageAuthenticationApi for MessageAuthenticator {
    fn local_peer_id(&self) -> PeerId {
        self.local_peer_id
    }

    fn authenticate(&self, msg: &P2pMessage) -> Result<MessageBody, RejectedMessage> {
        match validate_message(msg, &self.local_peer_id) {
            Ok(body) => {
                debug!(
                    peer = %msg.sender,
                    method = %sanitize_log_string(&body.method),
                    capability_id = %sanitize_log_string(&body.capability_id),
                    message_id = %sanitize_log_string(&body.message_id),
                    "accepted remote message"
                );
                Ok(body)
            }
            Err(rejected) => {
                match &rejected.body {
                    Some(body) => warn!(
                        peer = %msg.sender,
                        method = %sanitize_log_string(&body.method),
                        message_id = %sanitize_log_string(&body.message_id),
                        error = %rejected.reason,
                        "rejected remote message"
                    ),
                    None => warn!(
                        peer = %msg.sender,
                        payload_len = msg.payload.len(),
                        error = %rejected.reason,
                        "rejected undecodable remote message"
                    ),
                }
                Err(rejected)
            }
        }
    }
}

// =============================================================================
// RESPONSE AGGREGATION
// =============================================================================

/// Mode aggregator that needs a configurable number of identical responses.
///
/// The agreed bytes are decoded with the injected codec; a decode failure is
/// reported as [`AggregationError::Decode`], never as a best-effort value.
#[derive(Debug, Clone)]
pub struct DefaultModeAggregator<C: CapabilityResponseCodec> {
    min_identical_responses: u32,
    codec: C,
}

impl<C: CapabilityResponseCodec> DefaultModeAggregator<C> {
    pub fn new(min_identical_responses: u32, codec: C) -> Self {
        Self {
            min_identical_responses,
            codec,
        }
    }

    pub fn from_config(config: &RemoteCapabilitiesConfig, codec: C) -> Self {
        Self::new(config.min_identical_responses, codec)
    }

    pub fn min_identical_responses(&self) -> u32 {
        self.min_identical_responses
    }
}

impl<C: CapabilityResponseCodec> Aggregator for DefaultModeAggregator<C> {
    type Output = C::Response;

    fn aggregate(
        &self,
        event_id: &str,
        responses: &[Vec<u8>],
    ) -> Result<Self::Output, AggregationError> {
        let found = aggregate_mode_raw(responses, self.min_identical_responses).map_err(|e| {
            warn!(
                event_id = %sanitize_log_string(event_id),
                error = %e,
                "failed to aggregate responses"
            );
            e
        })?;

        debug!(
            event_id = %sanitize_log_string(event_id),
            responses = responses.len(),
            required = self.min_identical_responses,
            "responses reached quorum"
        );

        self.codec
            .decode(found)
            .map_err(|e| AggregationError::Decode(e.to_string()))
    }
}
