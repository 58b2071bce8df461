//! # Shared Text Utilities
//!
//! Helpers for turning server-supplied text into markup that is safe to inject
//! into the widget, and back into plain text for speech.
//!
//! - [`escape_html`] - Escape text for element bodies
//! - [`sanitize_answer`] - Neutralize tags in an answer while keeping `<br/>` breaks
//! - [`newlines_to_breaks`] - Render line breaks as `<br/>`
//! - [`strip_tags`] - Remove markup and collapse whitespace
//! - [`excerpt`] - Character-safe truncation
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{escape_html, excerpt};
//!
//! assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
//! assert_eq!(excerpt("héllo world", 5), "héllo");
//! ```

/// Escape `&`, `<` and `>` for use inside an element body.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Neutralize markup in an engine answer.
///
/// Angle brackets are escaped, then the escaped form of `<br/>` is restored so
/// the engine's explicit line breaks still render.
///
/// ```rust
/// use shared::utils::sanitize_answer;
///
/// assert_eq!(sanitize_answer("<script>x</script>"), "&lt;script&gt;x&lt;/script&gt;");
/// assert_eq!(sanitize_answer("one<br/>two"), "one<br/>two");
/// ```
pub fn sanitize_answer(answer: &str) -> String {
    answer
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("&lt;br/&gt;", "<br/>")
}

/// Replace every `\n` with `<br/>`.
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\n', "<br/>")
}

/// Replace every tag with a space, collapse whitespace runs and trim.
///
/// ```rust
/// use shared::utils::strip_tags;
///
/// assert_eq!(strip_tags("Line one<br/>Line  two"), "Line one Line two");
/// ```
pub fn strip_tags(markup: &str) -> String {
    let mut plain = String::with_capacity(markup.len());
    let mut chars = markup.chars();

    while let Some(ch) = chars.next() {
        if ch == '<' {
            // Only a closed, non-empty `<...>` counts as a tag
            let rest: String = chars.clone().take_while(|c| *c != '>').collect();
            let closed = chars.clone().nth(rest.chars().count()) == Some('>');
            if closed && !rest.is_empty() {
                for _ in 0..=rest.chars().count() {
                    chars.next();
                }
                plain.push(' ');
                continue;
            }
        }
        plain.push(ch);
    }

    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
