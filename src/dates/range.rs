//! Two-date range extraction from structural patterns.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use super::builder::build_date;

/// Shape of a range pattern's capture groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeShape {
    /// `<day1> (to|-) <day2> <month> [<year>]`
    DayFirstSameMonth,
    /// `<month> <day1> (to|-) <day2> [<year>]`
    MonthFirstSameMonth,
    /// `<day1> <month1> (to|-) <day2> <month2> [<year>]`
    CrossMonth,
}

struct RangePattern {
    shape: RangeShape,
    regex: Regex,
}

impl RangePattern {
    fn new(shape: RangeShape, pattern: &str) -> Self {
        Self {
            shape,
            regex: Regex::new(pattern).expect("Invalid regex"),
        }
    }
}

// Priority order: first entry is tried first.
static RANGE_PATTERNS: LazyLock<[RangePattern; 3]> = LazyLock::new(|| {
    [
        RangePattern::new(
            RangeShape::DayFirstSameMonth,
            r"(?i)(\d{1,2})\s*(?:to|-)\s*(\d{1,2})\s+([A-Za-z]+)\s*(\d{4})?",
        ),
        RangePattern::new(
            RangeShape::MonthFirstSameMonth,
            r"(?i)([A-Za-z]+)\s+(\d{1,2})\s*(?:to|-)\s*(\d{1,2})\s*(\d{4})?",
        ),
        RangePattern::new(
            RangeShape::CrossMonth,
            r"(?i)(\d{1,2})\s*([A-Za-z]+)\s*(?:to|-)\s*(\d{1,2})\s*([A-Za-z]+)\s*(\d{4})?",
        ),
    ]
});

/// Find a date range in normalized text.
///
/// Each pattern is located by its first (leftmost) occurrence. When that
/// occurrence does not resolve to two valid dates the next pattern in
/// priority order is tried. A missing year falls back to `default_year`
/// for both endpoints.
pub fn find_range(text: &str, default_year: i32) -> Option<(NaiveDate, NaiveDate)> {
    RANGE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(text)?;
        let range = resolve(pattern.shape, &caps, default_year);
        if range.is_none() {
            tracing::debug!(
                shape = ?pattern.shape,
                matched = &caps[0],
                "Range pattern matched but did not resolve"
            );
        }
        range
    })
}

fn resolve(
    shape: RangeShape,
    caps: &Captures<'_>,
    default_year: i32,
) -> Option<(NaiveDate, NaiveDate)> {
    let group = |i: usize| caps.get(i).map(|m| m.as_str());

    match shape {
        RangeShape::DayFirstSameMonth | RangeShape::MonthFirstSameMonth => {
            let (day1, day2, month) = if shape == RangeShape::DayFirstSameMonth {
                (group(1)?, group(2)?, group(3)?)
            } else {
                (group(2)?, group(3)?, group(1)?)
            };
            let year = year_or_default(group(4), default_year);
            let begin = build_date(day1, month, &year)?;
            let end = build_date(day2, month, &year)?;
            Some((begin, end))
        }
        RangeShape::CrossMonth => {
            // Each endpoint carries its own month; the year is shared.
            let year = year_or_default(group(5), default_year);
            let begin = build_date(group(1)?, group(2)?, &year)?;
            let end = build_date(group(3)?, group(4)?, &year)?;
            Some((begin, end))
        }
    }
}

pub(crate) fn year_or_default(captured: Option<&str>, default_year: i32) -> String {
    captured
        .map(str::to_string)
        .unwrap_or_else(|| default_year.to_string())
}
