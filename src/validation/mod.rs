//! Input validation
//!
//! Free-text JSON detection and the prompt form rules built on it.

pub mod prompt;

pub use prompt::{validate_prompt, ValidationError, ValidationResult};

use serde::de::IgnoredAny;

/// True if some substring starting at a `{` or `[` parses as JSON.
///
/// Every opening bracket is tried as a start, and every candidate end after it
/// in increasing order, until one parses. Worst case is quadratic in parse
/// attempts, which is fine for hand-written prompt templates. Trailing text
/// after a valid value does not matter.
///
/// Candidates are checked for syntax only, so out-of-range numbers such as
/// `1e400` and lone surrogate escapes still count as JSON.
pub fn text_contains_json(text: &str) -> bool {
    for (start, open) in text.char_indices() {
        if open != '{' && open != '[' {
            continue;
        }

        let rest = &text[start..];
        // A value opened by `{`/`[` can only end on a closing bracket
        for (offset, close) in rest.char_indices().skip(1) {
            if close != '}' && close != ']' {
                continue;
            }
            let candidate = &rest[..offset + 1];
            if serde_json::from_str::<IgnoredAny>(candidate).is_ok() {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_object() {
        assert!(text_contains_json("prefix {\"a\":1} suffix"));
    }

    #[test]
    fn test_no_braces() {
        assert!(!text_contains_json("no braces here"));
        assert!(!text_contains_json(""));
    }

    #[test]
    fn test_unterminated_object() {
        assert!(!text_contains_json("{invalid"));
        assert!(!text_contains_json("{\"a\": 1"));
    }

    #[test]
    fn test_array() {
        assert!(text_contains_json("[1,2,3]"));
    }

    #[test]
    fn test_syntax_only_literals() {
        assert!(text_contains_json("[1e400]"));
        assert!(text_contains_json(r#"{"a":"\ud800"}"#));
        assert!(!text_contains_json(r#"{"a":"\uZZZZ"}"#));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert!(text_contains_json("{\"a\": [1, 2]}}} and more"));
    }

    #[test]
    fn test_placeholder_braces_are_not_json() {
        assert!(!text_contains_json("Analyze the following text: {text}"));
    }

    #[test]
    fn test_later_start_is_found() {
        let template = "Input: {text}\n\nRespond with:\n{\n  \"arguments\": [\n    {\"argument\": \"...\"}\n  ]\n}";
        assert!(text_contains_json(template));
    }

    #[test]
    fn test_multibyte_text() {
        assert!(text_contains_json("Résumé ∴ {\"étape\": \"∴\"}"));
        assert!(!text_contains_json("∴ {étape}"));
    }
}
