//! Alias-reference detection.
//!
//! A token value may reference another token instead of holding a literal.
//! Two textual forms exist: variable-style (`$color.primary`) and
//! curly-style (`{color.primary}`). Detection is an existence test only;
//! the referenced target is never extracted or resolved.

use std::sync::LazyLock;

use regex::Regex;

use crate::token::RawValue;

/// Variable-style: `$` followed by at least one non-space, non-comma
/// character and ending in a word character. Curly-style: an opening brace
/// is enough; the content (and closing brace) are never inspected.
static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$[^\s,]+\w|\{.*").expect("alias pattern is valid"));

/// Whether a raw token value references another token.
///
/// Absent and empty values are not aliases. Numeric values are coerced to
/// their textual form before matching.
pub fn contains_alias<'a>(value: impl Into<Option<&'a RawValue>>) -> bool {
    let Some(value) = value.into() else {
        return false;
    };
    let text = value.to_string();
    if text.is_empty() {
        return false;
    }
    ALIAS_PATTERN.is_match(&text)
}
