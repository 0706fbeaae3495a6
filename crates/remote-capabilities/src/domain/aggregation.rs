//! # Mode Aggregation
//!
//! Reduces redundant peer responses to the single value that reached a floor
//! of byte-identical copies.
//!
//! ## Algorithm
//!
//! Responses are scanned strictly in input order and grouped by SHA-256
//! digest. The first response whose group count reaches `min_identical`
//! becomes the winner; afterwards a response only replaces the winner once its
//! group count strictly exceeds the winner's count at the time it won.
//!
//! The result is the value that was first, left to right, to reach the highest
//! count seen in the set. This differs from peers that re-arm the threshold at
//! the winner's own count, where a later tie replaces the winner: there
//! `[A,B,B,A]` with a floor of 2 yields `A` and `[B,A]` with a floor of 0
//! yields `A`, while here both yield `B`. `[A,A,B,B]` with a floor of 2 yields
//! `A` under this rule only. This is plurality with a floor, not majority: a
//! winner may hold fewer than half of the responses. The function is
//! deterministic in the exact input sequence; callers that want
//! order-independent results must normalise the order first.

use super::errors::AggregationError;
use shared_crypto::{content_digest, ContentDigest};
use std::collections::HashMap;

/// Return the response that reached the identical-response floor.
///
/// Fails with [`AggregationError::NoQuorum`] when no group of identical
/// responses reaches `min_identical`. A floor of zero accepts the first
/// response of a non-empty set.
pub fn aggregate_mode_raw<R: AsRef<[u8]>>(
    responses: &[R],
    min_identical: u32,
) -> Result<&[u8], AggregationError> {
    let mut counts: HashMap<ContentDigest, u32> = HashMap::with_capacity(responses.len());
    let mut threshold = min_identical;
    let mut found: Option<&[u8]> = None;
    let mut best = 0u32;

    for response in responses {
        let response = response.as_ref();
        let count = counts.entry(content_digest(response)).or_insert(0);
        *count += 1;
        best = best.max(*count);

        if *count >= threshold {
            found = Some(response);
            // A later group has to beat this count, not just tie it.
            threshold = count.saturating_add(1);
        }
    }

    found.ok_or(AggregationError::NoQuorum {
        required: min_identical,
        best,
        total: responses.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &[u8] = b"response-a";
    const B: &[u8] = b"response-b";
    const C: &[u8] = b"response-c";

    #[test]
    fn test_majority_value_wins() {
        assert_eq!(aggregate_mode_raw(&[A, A, B], 2), Ok(A));
    }

    #[test]
    fn test_all_distinct_has_no_quorum() {
        assert_eq!(
            aggregate_mode_raw(&[A, B, C], 2),
            Err(AggregationError::NoQuorum {
                required: 2,
                best: 1,
                total: 3
            })
        );
    }

    #[test]
    fn test_tie_goes_to_first_to_reach_floor() {
        assert_eq!(aggregate_mode_raw(&[A, A, B, B], 2), Ok(A));
        assert_eq!(aggregate_mode_raw(&[B, B, A, A], 2), Ok(B));
    }

    #[test]
    fn test_tie_is_order_sensitive_not_value_sensitive() {
        // B completes its pair before A does.
        assert_eq!(aggregate_mode_raw(&[A, B, B, A], 2), Ok(B));
    }

    #[test]
    fn test_higher_count_replaces_winner() {
        assert_eq!(aggregate_mode_raw(&[A, B, B, A, A], 2), Ok(A));
    }

    #[test]
    fn test_plurality_below_half_wins() {
        let responses = [A, A, B, C, b"d".as_slice(), b"e".as_slice()];
        assert_eq!(aggregate_mode_raw(&responses, 2), Ok(A));
    }

    #[test]
    fn test_single_response_with_floor_one() {
        assert_eq!(aggregate_mode_raw(&[C], 1), Ok(C));
    }

    #[test]
    fn test_zero_floor_takes_first_response() {
        assert_eq!(aggregate_mode_raw(&[B, A, A], 0), Ok(A));
        assert_eq!(aggregate_mode_raw(&[B, A], 0), Ok(B));
    }

    #[test]
    fn test_empty_set_has_no_quorum() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(
            aggregate_mode_raw(&empty, 1),
            Err(AggregationError::NoQuorum {
                required: 1,
                best: 0,
                total: 0
            })
        );
    }

    #[test]
    fn test_empty_responses_can_win() {
        let responses: Vec<Vec<u8>> = vec![vec![], vec![], b"x".to_vec()];
        assert_eq!(aggregate_mode_raw(&responses, 2), Ok(&[][..]));
    }

    #[test]
    fn test_floor_above_set_size() {
        assert!(aggregate_mode_raw(&[A, A, A], 4).is_err());
    }

    #[test]
    fn test_winner_is_borrowed_from_input() {
        let responses = vec![A.to_vec(), A.to_vec()];
        let winner = aggregate_mode_raw(&responses, 2).unwrap();
        assert!(std::ptr::eq(winner.as_ptr(), responses[1].as_ptr()));
    }
}
