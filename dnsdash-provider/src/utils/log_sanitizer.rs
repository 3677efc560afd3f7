//! Keeps response bodies and tokens out of the log in full.

use std::borrow::Cow;

/// Maximum number of bytes of a body written to the log.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters kept by [`redact_token`].
const TOKEN_VISIBLE_PREFIX: usize = 4;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Shorten `s` to at most [`TRUNCATE_LIMIT`] bytes, noting the original length.
pub fn truncate_for_log(s: &str) -> Cow<'_, str> {
    if s.len() <= TRUNCATE_LIMIT {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        ))
    }
}

/// `"abcd****"` for logging which token is in use.
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
    if visible.len() == token.len() {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_borrowed() {
        let s = r#"{"error":{"code":"not_found"}}"#;
        assert!(matches!(truncate_for_log(s), Cow::Borrowed(b) if b == s));
    }

    #[test]
    fn long_body_is_truncated_with_length() {
        let s = "x".repeat(TRUNCATE_LIMIT + 44);
        let out = truncate_for_log(&s);
        assert!(out.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 44)));
        assert!(out.len() < s.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "é".repeat(200);
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn redact_token_keeps_short_prefix() {
        assert_eq!(redact_token("abcdefgh"), "abcd****");
        assert_eq!(redact_token("abc"), "****");
    }
}
