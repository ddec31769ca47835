//! Ordinal suffix stripping.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static ORDINAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)").expect("Invalid regex"));

/// Remove ordinal suffixes from numbers ("24th" becomes "24").
///
/// Suffixes are matched case-sensitively and nothing else in the text is
/// touched, so the result keeps the caller's spacing and casing.
pub fn strip_ordinals(text: &str) -> Cow<'_, str> {
    ORDINAL_PATTERN.replace_all(text, "$1")
}
