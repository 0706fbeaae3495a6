//! # Envelope Authentication
//!
//! Pure validation of inbound envelopes, no I/O.
//!
//! ## Check Order
//!
//! 1. **Decode**: envelope, then body
//! 2. **Structure**: sender and receiver are exactly one peer id long
//! 3. **Signature**: Ed25519 over the carried body bytes, keyed by the sender
//! 4. **Anti-relay**: claimed sender equals the transport-observed sender
//! 5. **Addressing**: receiver equals the local node
//!
//! Cheap structural rejections run before signature verification, and no
//! identity field is compared before the signature has been checked.

use super::errors::{RejectedMessage, ValidationError};
use super::message::{Envelope, MessageBody, P2pMessage};
use super::peer::{to_peer_id, PeerId, PEER_ID_LENGTH};
use prost::Message;
use shared_crypto::{verify_detached, Ed25519KeyPair};

/// Authenticate a transport message addressed to `expected_receiver`.
///
/// On success returns the validated body. On failure the [`RejectedMessage`]
/// still carries the parsed body for every check after decoding.
pub fn validate_message(
    msg: &P2pMessage,
    expected_receiver: &PeerId,
) -> Result<MessageBody, RejectedMessage> {
    let envelope = Envelope::decode(msg.payload.as_slice()).map_err(|e| {
        RejectedMessage::undecodable(ValidationError::Decode {
            what: "message",
            reason: e.to_string(),
        })
    })?;

    let body = MessageBody::decode(envelope.body.as_slice()).map_err(|e| {
        RejectedMessage::undecodable(ValidationError::Decode {
            what: "message body",
            reason: e.to_string(),
        })
    })?;

    if body.sender.len() != PEER_ID_LENGTH || body.receiver.len() != PEER_ID_LENGTH {
        let reason = ValidationError::MalformedIdentity {
            sender_len: body.sender.len(),
            receiver_len: body.receiver.len(),
        };
        return Err(RejectedMessage::with_body(body, reason));
    }

    if verify_detached(&body.sender, &envelope.body, &envelope.signature).is_err() {
        return Err(RejectedMessage::with_body(
            body,
            ValidationError::InvalidSignature,
        ));
    }

    // Relaying is not supported, so the p2p sender must be the author.
    if body.sender.as_slice() != msg.sender.as_bytes() {
        let reason = ValidationError::RelayRejected {
            claimed: to_peer_id(&body.sender),
            transport: msg.sender,
        };
        return Err(RejectedMessage::with_body(body, reason));
    }

    if body.receiver.as_slice() != expected_receiver.as_bytes() {
        let reason = ValidationError::Misdirected {
            receiver: to_peer_id(&body.receiver),
            expected: *expected_receiver,
        };
        return Err(RejectedMessage::with_body(body, reason));
    }

    Ok(body)
}

/// Encode `body` once and sign exactly those bytes.
///
/// The caller is expected to have set `body.sender` to the keypair's public
/// key; the envelope is otherwise rejected by [`validate_message`] on the
/// receiving side.
pub fn seal_message(keypair: &Ed25519KeyPair, body: &MessageBody) -> Envelope {
    let body = body.encode_to_vec();
    let signature = keypair.sign(&body).to_vec();
    Envelope { signature, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypair(seed: u8) -> Ed25519KeyPair {
        Ed25519KeyPair::from_seed([seed; 32])
    }

    fn peer(kp: &Ed25519KeyPair) -> PeerId {
        kp.public_key().into()
    }

    fn body(sender: &PeerId, receiver: &PeerId) -> MessageBody {
        MessageBody {
            version: 1,
            sender: sender.as_bytes().to_vec(),
            receiver: receiver.as_bytes().to_vec(),
            method: "Execute".into(),
            payload: b"request".to_vec(),
            ..Default::default()
        }
    }

    fn wire(sender: PeerId, envelope: &Envelope) -> P2pMessage {
        P2pMessage::new(sender, envelope.encode_to_vec())
    }

    #[test]
    fn test_valid_message_returns_exact_body() {
        let alice = keypair(1);
        let bob = PeerId::new([2u8; 32]);
        let sent = body(&peer(&alice), &bob);

        let msg = wire(peer(&alice), &seal_message(&alice, &sent));

        assert_eq!(validate_message(&msg, &bob), Ok(sent));
    }

    #[test]
    fn test_garbage_payload_has_no_body() {
        let msg = P2pMessage::new(PeerId::default(), vec![0xFF, 0xFF, 0xFF]);

        let rejected = validate_message(&msg, &PeerId::default()).unwrap_err();

        assert!(rejected.body.is_none());
        assert!(matches!(
            rejected.reason,
            ValidationError::Decode { what: "message", .. }
        ));
    }

    #[test]
    fn test_garbage_body_has_no_body() {
        let envelope = Envelope {
            signature: vec![0u8; 64],
            body: vec![0xFF, 0xFF, 0xFF],
        };
        let msg = wire(PeerId::default(), &envelope);

        let rejected = validate_message(&msg, &PeerId::default()).unwrap_err();

        assert!(rejected.body.is_none());
        assert!(matches!(
            rejected.reason,
            ValidationError::Decode {
                what: "message body",
                ..
            }
        ));
    }

    #[test]
    fn test_short_sender_is_malformed() {
        let alice = keypair(1);
        let bob = PeerId::new([2u8; 32]);
        let mut sent = body(&peer(&alice), &bob);
        sent.sender.truncate(31);

        let msg = wire(peer(&alice), &seal_message(&alice, &sent));
        let rejected = validate_message(&msg, &bob).unwrap_err();

        assert_eq!(
            rejected.reason,
            ValidationError::MalformedIdentity {
                sender_len: 31,
                receiver_len: 32
            }
        );
        assert_eq!(rejected.body, Some(sent));
    }

    #[test]
    fn test_long_receiver_is_malformed() {
        let alice = keypair(1);
        let bob = PeerId::new([2u8; 32]);
        let mut sent = body(&peer(&alice), &bob);
        sent.receiver.push(0);

        let msg = wire(peer(&alice), &seal_message(&alice, &sent));
        let rejected = validate_message(&msg, &bob).unwrap_err();

        assert_eq!(
            rejected.reason,
            ValidationError::MalformedIdentity {
                sender_len: 32,
                receiver_len: 33
            }
        );
    }

    #[test]
    fn test_signature_by_other_key_fails() {
        let alice = keypair(1);
        let mallory = keypair(3);
        let bob = PeerId::new([2u8; 32]);
        let sent = body(&peer(&alice), &bob);

        let msg = wire(peer(&alice), &seal_message(&mallory, &sent));
        let rejected = validate_message(&msg, &bob).unwrap_err();

        assert_eq!(rejected.reason, ValidationError::InvalidSignature);
        assert_eq!(rejected.body, Some(sent));
    }

    #[test]
    fn test_empty_signature_fails() {
        let alice = keypair(1);
        let bob = PeerId::new([2u8; 32]);
        let mut envelope = seal_message(&alice, &body(&peer(&alice), &bob));
        envelope.signature.clear();

        let rejected = validate_message(&wire(peer(&alice), &envelope), &bob).unwrap_err();

        assert_eq!(rejected.reason, ValidationError::InvalidSignature);
    }

    #[test]
    fn test_relayed_message_is_rejected() {
        let alice = keypair(1);
        let relay = keypair(4);
        let bob = PeerId::new([2u8; 32]);
        let sent = body(&peer(&alice), &bob);

        let msg = wire(peer(&relay), &seal_message(&alice, &sent));
        let rejected = validate_message(&msg, &bob).unwrap_err();

        assert_eq!(
            rejected.reason,
            ValidationError::RelayRejected {
                claimed: peer(&alice),
                transport: peer(&relay)
            }
        );
        assert_eq!(rejected.body, Some(sent));
    }

    #[test]
    fn test_misdirected_message_is_rejected() {
        let alice = keypair(1);
        let bob = PeerId::new([2u8; 32]);
        let carol = PeerId::new([5u8; 32]);
        let sent = body(&peer(&alice), &carol);

        let msg = wire(peer(&alice), &seal_message(&alice, &sent));
        let rejected = validate_message(&msg, &bob).unwrap_err();

        assert_eq!(
            rejected.reason,
            ValidationError::Misdirected {
                receiver: carol,
                expected: bob
            }
        );
        assert_eq!(rejected.body, Some(sent));
    }
}
