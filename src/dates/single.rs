//! Single-date extraction, tried when no range was found.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::builder::build_date;
use super::range::year_or_default;
use crate::utils::is_numeric;

static SINGLE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // "24 apr", "24 april 2025"
        Regex::new(r"(?i)(\d{1,2})\s*([A-Za-z]+)\s*(\d{4})?").expect("Invalid regex"),
        // "apr 24", "april 24 2025"
        Regex::new(r"(?i)([A-Za-z]+)\s*(\d{1,2})\s*(\d{4})?").expect("Invalid regex"),
    ]
});

/// Find a single date in normalized text.
///
/// Patterns are tried day-then-month first, then month-then-day; only the
/// first occurrence of each is considered.
pub fn find_single(text: &str, default_year: i32) -> Option<NaiveDate> {
    SINGLE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let first = caps.get(1)?.as_str();
        let second = caps.get(2)?.as_str();
        let (day, month) = if is_numeric(first) {
            (first, second)
        } else {
            (second, first)
        };
        let year = year_or_default(caps.get(3).map(|m| m.as_str()), default_year);
        build_date(day, month, &year)
    })
}
