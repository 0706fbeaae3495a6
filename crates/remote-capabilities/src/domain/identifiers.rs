//! Identifier shape checks and log sanitising for untrusted peer input.

/// Longest string written to logs before truncation.
pub const MAX_LOGGED_STRING_LEN: usize = 256;

/// Workflow and execution IDs are hex-encoded 32-byte values.
pub const VALID_WORKFLOW_ID_LEN: usize = 64;

/// Longest accepted trigger event or message ID.
pub const MAX_ID_LEN: usize = 128;

const UNPRINTABLE_PREFIX: &str = "[UNPRINTABLE] ";
const TRUNCATED_SUFFIX: &str = " [TRUNCATED]";

/// Whether a single byte, read as the code point `U+00XX`, is printable.
///
/// Printable means graphic or the ASCII space: `0x20..=0x7E` and
/// `0xA1..=0xFF` except the soft hyphen `0xAD`. Controls, DEL, the C1 range
/// and the no-break space `0xA0` are not printable.
pub fn is_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7E) || (b >= 0xA1 && b != 0xAD)
}

/// Workflow IDs and execution IDs are 32-byte hex-encoded strings.
pub fn is_valid_workflow_or_execution_id(id: &str) -> bool {
    id.len() == VALID_WORKFLOW_ID_LEN && hex::decode(id).is_ok()
}

/// Trigger event IDs and message IDs are non-empty, bounded and printable.
pub fn is_valid_id(id: impl AsRef<[u8]>) -> bool {
    let id = id.as_ref();
    !id.is_empty() && id.len() <= MAX_ID_LEN && id.iter().copied().all(is_printable)
}

/// Make untrusted content safe to write to a log line.
///
/// Input longer than [`MAX_LOGGED_STRING_LEN`] bytes is cut and marked
/// `[TRUNCATED]`. If any remaining byte is unprintable, or the printable bytes
/// are not valid UTF-8 (a lone high byte, or a sequence split by the cut), the
/// whole (cut) input is hex-encoded behind an `[UNPRINTABLE]` marker instead of
/// being written raw. No input byte is ever replaced or dropped.
pub fn sanitize_log_string(s: impl AsRef<[u8]>) -> String {
    let mut bytes = s.as_ref();
    let mut suffix = "";
    if bytes.len() > MAX_LOGGED_STRING_LEN {
        bytes = &bytes[..MAX_LOGGED_STRING_LEN];
        suffix = TRUNCATED_SUFFIX;
    }

    match std::str::from_utf8(bytes) {
        Ok(text) if bytes.iter().copied().all(is_printable) => format!("{text}{suffix}"),
        _ => format!("{UNPRINTABLE_PREFIX}{}{suffix}", hex::encode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_id_accepts_64_hex_chars() {
        let id = "a".repeat(64);
        assert!(is_valid_workflow_or_execution_id(&id));
        assert!(is_valid_workflow_or_execution_id(&"0123456789abcdef".repeat(4)));
    }

    #[test]
    fn test_workflow_id_accepts_uppercase_hex() {
        assert!(is_valid_workflow_or_execution_id(&"ABCDEF0123456789".repeat(4)));
    }

    #[test]
    fn test_workflow_id_rejects_wrong_length() {
        assert!(!is_valid_workflow_or_execution_id(&"a".repeat(63)));
        assert!(!is_valid_workflow_or_execution_id(&"a".repeat(65)));
        assert!(!is_valid_workflow_or_execution_id(""));
    }

    #[test]
    fn test_workflow_id_rejects_non_hex() {
        let id = format!("{}g", "a".repeat(63));
        assert!(!is_valid_workflow_or_execution_id(&id));
    }

    #[test]
    fn test_id_bounds() {
        assert!(!is_valid_id(""));
        assert!(is_valid_id("a"));
        assert!(is_valid_id("x".repeat(MAX_ID_LEN)));
        assert!(!is_valid_id("x".repeat(MAX_ID_LEN + 1)));
    }

    #[test]
    fn test_id_rejects_control_characters() {
        assert!(!is_valid_id("event\n1"));
        assert!(!is_valid_id("event\x001"));
        assert!(!is_valid_id("event\x7f"));
    }

    #[test]
    fn test_id_allows_spaces_and_punctuation() {
        assert!(is_valid_id("trigger event #1: ok!"));
    }

    #[test]
    fn test_printable_byte_table() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x1F));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0x85));
        assert!(!is_printable(0xA0));
        assert!(is_printable(0xA1));
        assert!(!is_printable(0xAD));
        assert!(is_printable(0xFF));
    }

    #[test]
    fn test_sanitize_passes_short_printable() {
        assert_eq!(sanitize_log_string("hello world"), "hello world");
    }

    #[test]
    fn test_sanitize_truncates_long_printable() {
        let input = "p".repeat(300);
        let expected = format!("{} [TRUNCATED]", "p".repeat(256));
        assert_eq!(sanitize_log_string(&input), expected);
    }

    #[test]
    fn test_sanitize_exact_limit_is_not_truncated() {
        let input = "p".repeat(256);
        assert_eq!(sanitize_log_string(&input), input);
    }

    #[test]
    fn test_sanitize_hex_encodes_unprintable() {
        assert_eq!(sanitize_log_string("ab\x01"), "[UNPRINTABLE] 616201");
    }

    #[test]
    fn test_sanitize_unprintable_and_truncated() {
        let mut input = vec![b'\n'];
        input.extend(std::iter::repeat(b'q').take(299));

        let out = sanitize_log_string(&input);

        assert!(out.starts_with("[UNPRINTABLE] 0a7171"));
        assert!(out.ends_with(" [TRUNCATED]"));
        let hex_part = &out["[UNPRINTABLE] ".len()..out.len() - " [TRUNCATED]".len()];
        assert_eq!(hex_part.len(), 512);
    }

    #[test]
    fn test_sanitize_hex_encodes_invalid_utf8() {
        assert_eq!(
            sanitize_log_string([b'a', 0xE9, b'b']),
            "[UNPRINTABLE] 61e962"
        );
    }

    #[test]
    fn test_sanitize_keeps_printable_utf8() {
        assert_eq!(sanitize_log_string("café"), "café");
    }

    #[test]
    fn test_sanitize_hex_encodes_utf8_split_by_cut() {
        // "é" is 0xC3 0xA9; the cut at 256 bytes keeps only 0xC3.
        let mut input = "s".repeat(255);
        input.push('é');

        let out = sanitize_log_string(&input);

        let expected = format!("[UNPRINTABLE] {}c3 [TRUNCATED]", "73".repeat(255));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_sanitize_ignores_unprintable_after_cut() {
        let mut input = "r".repeat(256).into_bytes();
        input.push(0x00);

        let out = sanitize_log_string(&input);

        assert_eq!(out, format!("{} [TRUNCATED]", "r".repeat(256)));
    }
}
