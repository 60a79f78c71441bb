//! Input sanitization and validation
//!
//! Cleans free-text fields before they reach storage: HTML tags are stripped,
//! the remaining special characters are entity-escaped, and the result is
//! trimmed. Length validation wraps the sanitizer and reports failures as
//! data, never as errors.

/// Default character bound applied by callers that have no configured limit.
pub const DEFAULT_MAX_LENGTH: usize = 200;

/// Outcome of validating a piece of user text.
///
/// `sanitized` is always populated, valid or not, so callers can show the
/// cleaned text alongside the error message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextValidation {
    pub is_valid: bool,
    pub sanitized: String,
    pub error: Option<String>,
}

/// Sanitize user text: strip HTML tags, escape special characters, trim.
///
/// Tag stripping runs first so the `<` and `>` of a tag are removed rather
/// than escaped. The matcher takes the shortest span between a `<` and the
/// next `>`; an unmatched `<` with no closing `>` is left in place and gets
/// escaped. Good enough for display cleanliness, not a full XSS defense.
pub fn sanitize_text(text: &str) -> String {
    let stripped = strip_tags(text);

    let mut escaped = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped.trim().to_string()
}

/// Remove every shortest `<`...`>` span from the text.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => {
                // Skip past the closing '>' of this span
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unmatched '<' with no '>' ahead: keep the remainder as-is
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Sanitize text and validate its length against an inclusive bound.
///
/// Never fails: an empty or oversized result is reported through the
/// returned `TextValidation`, not as an error value.
pub fn validate_text(text: &str, max_length: usize) -> TextValidation {
    let sanitized = sanitize_text(text);

    if sanitized.is_empty() {
        return TextValidation {
            is_valid: false,
            sanitized,
            error: Some("Text cannot be empty".to_string()),
        };
    }

    if sanitized.chars().count() > max_length {
        return TextValidation {
            is_valid: false,
            sanitized,
            error: Some(format!("Text must be {} characters or less", max_length)),
        };
    }

    TextValidation {
        is_valid: true,
        sanitized,
        error: None,
    }
}

/// Pass/fail variant for call sites that don't need the sanitized text.
pub fn is_valid_text_length(text: &str, max_length: usize) -> bool {
    let sanitized = sanitize_text(text);
    !sanitized.is_empty() && sanitized.chars().count() <= max_length
}
