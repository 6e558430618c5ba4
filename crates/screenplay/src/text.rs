//! Flash-message normalisation
//!
//! The target site's flash element carries a trailing "×" dismiss glyph and
//! layout whitespace around the message proper. These are best-effort
//! string cleanups; if the site's markup drifts, the mismatch surfaces as a
//! failed comparison rather than a distinct error.

/// Drop a trailing dismiss glyph and surrounding whitespace.
pub fn strip_dismiss_glyph(message: &str) -> String {
    let trimmed = message.trim_end();
    trimmed.strip_suffix('×').unwrap_or(trimmed).trim().to_string()
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_dismiss_glyph() {
        assert_eq!(
            strip_dismiss_glyph("You logged into a secure area!\n            ×\n"),
            "You logged into a secure area!"
        );
        assert_eq!(strip_dismiss_glyph("  plain message  "), "plain message");
        // Only a trailing glyph is stripped
        assert_eq!(strip_dismiss_glyph("a × b"), "a × b");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Your username\n   is invalid!  "),
            "Your username is invalid!"
        );
        assert_eq!(collapse_whitespace("already clean"), "already clean");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
