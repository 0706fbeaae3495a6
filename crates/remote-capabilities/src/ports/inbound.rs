//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem. Implementations must
//! be thread-safe (`Send + Sync`) and hold no mutable state.

use crate::domain::errors::{AggregationError, RejectedMessage};
use crate::domain::message::{MessageBody, P2pMessage};
use crate::domain::peer::PeerId;

/// Reduces the responses collected for one request or trigger event.
///
/// Alternative quorum policies implement this trait and can be swapped in
/// without touching message authentication.
pub trait Aggregator: Send + Sync {
    /// Structured result produced from the agreed response.
    type Output;

    /// Aggregate `responses` in collection order.
    ///
    /// `event_id` identifies the logical request for policies that need it;
    /// the mode aggregator ignores it.
    fn aggregate(
        &self,
        event_id: &str,
        responses: &[Vec<u8>],
    ) -> Result<Self::Output, AggregationError>;
}

/// Authentication of inbound transport messages for the local node.
pub trait MessageAuthenticationApi: Send + Sync {
    /// Identity inbound messages must be addressed to.
    fn local_peer_id(&self) -> PeerId;

    /// Validate a transport message; see
    /// [`validate_message`](crate::domain::validation::validate_message).
    fn authenticate(&self, msg: &P2pMessage) -> Result<MessageBody, RejectedMessage>;
}
