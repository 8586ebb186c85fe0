//! String utilities
//!
//! Helpers for safe string manipulation in log fields.

/// Truncate at a character boundary, appending an ellipsis when the input
/// was cut. Keeps prompt excerpts in log fields bounded without splitting
/// multi-byte characters.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_input_unchanged() {
        assert_eq!(excerpt("Hello", 10), "Hello");
        assert_eq!(excerpt("Hello", 5), "Hello");
    }

    #[test]
    fn test_excerpt_truncates_long_input() {
        assert_eq!(excerpt("Hello, World!", 5), "Hello...");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let text = "Hello, 世界!";
        assert_eq!(excerpt(text, 8), "Hello, 世...");
        assert_eq!(excerpt(text, 100), "Hello, 世界!");
    }

    #[test]
    fn test_excerpt_empty_input() {
        assert_eq!(excerpt("", 10), "");
    }
}
