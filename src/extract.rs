//! Fenced code block extraction for model responses.
//!
//! Models frequently wrap code in Markdown fences even when told not to.
//! [`extract_fenced`] pulls out the body of the first fence and leaves
//! unfenced text alone, so callers never have to handle a "no match" case.

use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    // Optional language tag must be followed by a newline to count as a tag.
    FENCE.get_or_init(|| Regex::new(r"(?s)```(?:\w+\n)?(.*?)```").expect("fence pattern compiles"))
}

/// Return the contents of the first fenced block in `text`.
///
/// The opening fence may carry a language tag (```` ```css ````) which is
/// dropped together with its newline. Matching is non-greedy and spans
/// newlines. When no complete fence exists the input is returned as-is.
///
/// # Example
///
/// ```rust
/// use codeagentix_server::extract_fenced;
///
/// assert_eq!(extract_fenced("```css\nbody {}\n```"), "body {}\n");
/// assert_eq!(extract_fenced("body {}"), "body {}");
/// ```
pub fn extract_fenced(text: &str) -> &str {
    fence_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |body| body.as_str())
}

/// Whether `text` contains a complete fenced block.
pub fn has_fence(text: &str) -> bool {
    fence_pattern().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_fence_drops_tag_and_markers() {
        let raw = "Here you go:\n```html\n<main>hi</main>\n```\nEnjoy.";
        assert_eq!(extract_fenced(raw), "<main>hi</main>\n");
    }

    #[test]
    fn test_untagged_fence() {
        assert_eq!(extract_fenced("``` let x = 1; ```"), " let x = 1; ");
    }

    #[test]
    fn test_first_fence_wins() {
        let raw = "```js\nfirst()\n```\n```js\nsecond()\n```";
        assert_eq!(extract_fenced(raw), "first()\n");
    }

    #[test]
    fn test_unfenced_text_is_returned_unchanged() {
        let raw = "body { color: red; }";
        assert_eq!(extract_fenced(raw), raw);
        assert!(!has_fence(raw));
    }

    #[test]
    fn test_unterminated_fence_is_not_a_match() {
        let raw = "```css\nbody {}";
        assert_eq!(extract_fenced(raw), raw);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_fenced(""), "");
    }
}
