//! Calendar date construction from captured day/month/year text.
//!
//! Pattern captures cannot always tell whether the day or the month came
//! first, and month names show up both abbreviated and spelled out. The
//! builder therefore renders the components as `"<day> <month> <year>"` and
//! tries a fixed list of interpretations against that text. The first one
//! that parses wins; there is no scoring between them.

use chrono::NaiveDate;

/// Order in which the day and month appear in the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    DayMonthYear,
    MonthDayYear,
}

/// Spelling of the month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// Three-letter abbreviation ("apr").
    Abbreviated,
    /// Full name ("april").
    Full,
}

/// One interpretation tried by [`build_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub arrangement: Arrangement,
    pub month_style: MonthStyle,
}

impl DateFormat {
    const fn new(arrangement: Arrangement, month_style: MonthStyle) -> Self {
        Self {
            arrangement,
            month_style,
        }
    }

    /// The chrono format string for this interpretation.
    pub fn pattern(&self) -> &'static str {
        match (self.arrangement, self.month_style) {
            (Arrangement::DayMonthYear, MonthStyle::Abbreviated) => "%d %b %Y",
            (Arrangement::DayMonthYear, MonthStyle::Full) => "%d %B %Y",
            (Arrangement::MonthDayYear, MonthStyle::Abbreviated) => "%b %d %Y",
            (Arrangement::MonthDayYear, MonthStyle::Full) => "%B %d %Y",
        }
    }
}

/// Interpretations in the order they are attempted. Changing this order
/// changes which date wins for ambiguous input.
pub const DATE_FORMATS: [DateFormat; 4] = [
    DateFormat::new(Arrangement::DayMonthYear, MonthStyle::Abbreviated),
    DateFormat::new(Arrangement::DayMonthYear, MonthStyle::Full),
    DateFormat::new(Arrangement::MonthDayYear, MonthStyle::Abbreviated),
    DateFormat::new(Arrangement::MonthDayYear, MonthStyle::Full),
];

/// Build a calendar date from captured components.
///
/// Returns `None` when no interpretation yields a valid date, e.g. an
/// unknown month spelling or day 31 in a 30-day month.
pub fn build_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let text = format!("{} {} {}", day, month, year);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format.pattern()).ok())
}
