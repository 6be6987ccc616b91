/// Find the largest valid UTF-8 boundary at or before the given byte index.
/// Returns the byte index that is safe to slice at.
#[inline]
fn safe_byte_boundary(s: &str, max_bytes: usize) -> usize {
    if max_bytes >= s.len() {
        return s.len();
    }
    // Find the character boundary at or before max_bytes
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_bytes)
        .last()
        .unwrap_or(0)
}

/// Truncate a string with a marker if it exceeds the maximum length (UTF-8 safe).
///
/// Returns an owned String. The max_len is in bytes, but truncation respects
/// UTF-8 character boundaries to avoid panics with multi-byte characters.
#[inline]
pub fn truncate_with_marker(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let boundary = safe_byte_boundary(s, max_len);
        format!("{}...[truncated]", &s[..boundary])
    }
}

/// Clip a string to a maximum character count, returning a borrowed slice.
///
/// No suffix is added. Counts characters, not bytes, so multi-byte text
/// (Japanese business descriptions are the common case here) clips cleanly.
#[inline]
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string to maximum character count (UTF-8 safe).
///
/// This function is O(n) where n is the character count, but guarantees
/// correct handling of multi-byte UTF-8 characters.
/// Adds "..." suffix if truncated.
#[inline]
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_marker_short() {
        let result = truncate_with_marker("hello", 10);
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_with_marker_long() {
        let result = truncate_with_marker("hello world", 5);
        assert_eq!(result, "hello...[truncated]");
    }

    #[test]
    fn test_truncate_with_marker_unicode() {
        // Each kana is 3 bytes; byte 10 lands mid-character
        let japanese = "オーガニック食品のショップ";
        let result = truncate_with_marker(japanese, 10);
        assert!(result.ends_with("...[truncated]"));
        assert!(!result.contains('\u{FFFD}'));
    }

    #[test]
    fn test_clip_chars_short() {
        assert_eq!(clip_chars("hello", 10), "hello");
    }

    #[test]
    fn test_clip_chars_exact() {
        assert_eq!(clip_chars("hello", 5), "hello");
    }

    #[test]
    fn test_clip_chars_long() {
        assert_eq!(clip_chars("hello world", 5), "hello");
    }

    #[test]
    fn test_clip_chars_unicode() {
        assert_eq!(clip_chars("オーガニック食品", 6), "オーガニック");
    }

    #[test]
    fn test_truncate_chars_short() {
        let result = truncate_chars("hello", 10);
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_chars_long() {
        let result = truncate_chars("hello world", 8);
        assert_eq!(result, "hello...");
    }

    #[test]
    fn test_truncate_chars_unicode() {
        let result = truncate_chars("オーガニック食品の通販", 8);
        assert_eq!(result, "オーガニッ...");
    }
}
