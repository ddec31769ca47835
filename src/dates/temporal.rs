//! General-purpose natural-language date search.
//!
//! This is the default [`DateSearch`] used when no structural pattern
//! matched. It recognizes:
//! - Absolute dates: "2024-01-15", "January 15, 2024", "15 Jan"
//! - Numeric dates: "1/15/2024", "15/01/2024", "15-01-2024", "15.01.24"
//! - Relative dates: "today", "tomorrow", "day after tomorrow", "yesterday"
//! - Weekdays: "next Friday", "this Monday", "on Tuesday"
//! - Offsets: "in 2 weeks", "in a week", "next month"
//! - Period ends: "end of the month", "end of year"
//!
//! Numeric dates are read month-first. If any numeric date in the text is
//! only valid day-first, every numeric date in that text is read day-first.

use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use regex::{Captures, Regex};

use super::fallback::{DateMatch, DateSearch};
use crate::utils::is_numeric;

const MONTHS: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static ISO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("Invalid regex"));

static MONTH_DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s*(\d{{4}})\b)?"
    ))
    .expect("Invalid regex")
});

static DAY_MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\b\.?(?:,?\s*(\d{{4}})\b)?"
    ))
    .expect("Invalid regex")
});

static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})\b").expect("Invalid regex")
});

static RELATIVE_DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(day\s+after\s+tomorrow|today|tomorrow|yesterday)\b")
        .expect("Invalid regex")
});

static WEEKDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(next|this|on)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .expect("Invalid regex")
});

static IN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+(\d+|an?|one)\s+(days?|weeks?|months?|years?)\b")
        .expect("Invalid regex")
});

static NEXT_PERIOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnext\s+(week|month|year)\b").expect("Invalid regex"));

static END_OF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bend\s+of\s+(?:the\s+)?(week|month|year)\b").expect("Invalid regex")
});

/// Rule-based natural-language date search.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalSearch;

impl TemporalSearch {
    pub fn new() -> Self {
        Self
    }
}

impl DateSearch for TemporalSearch {
    fn search(&self, text: &str, anchor: NaiveDateTime) -> Vec<DateMatch> {
        let today = anchor.date();
        let mut results = Vec::new();

        collect(&mut results, &ISO_PATTERN, text, |cap| {
            NaiveDate::from_ymd_opt(
                cap[1].parse().ok()?,
                cap[2].parse().ok()?,
                cap[3].parse().ok()?,
            )
        });
        collect(&mut results, &MONTH_DAY_PATTERN, text, |cap| {
            month_date(&cap[1], &cap[2], cap.get(3).map(|m| m.as_str()), today)
        });
        collect(&mut results, &DAY_MONTH_PATTERN, text, |cap| {
            month_date(&cap[2], &cap[1], cap.get(3).map(|m| m.as_str()), today)
        });
        results.extend(numeric_dates(text));
        collect(&mut results, &RELATIVE_DAY_PATTERN, text, |cap| {
            let term = cap[1].to_lowercase();
            match term.as_str() {
                "today" => Some(today),
                "tomorrow" => today.succ_opt(),
                "yesterday" => today.pred_opt(),
                _ => today.checked_add_days(Days::new(2)),
            }
        });
        collect(&mut results, &WEEKDAY_PATTERN, text, |cap| {
            let weekday: Weekday = cap[2].parse().ok()?;
            let skip_today = cap
                .get(1)
                .is_some_and(|m| m.as_str().eq_ignore_ascii_case("next"));
            upcoming_weekday(today, weekday, skip_today)
        });
        collect(&mut results, &IN_PATTERN, text, |cap| {
            // "a", "an" and "one" all mean a single unit.
            let amount: u32 = if is_numeric(&cap[1]) {
                cap[1].parse().ok()?
            } else {
                1
            };
            offset(today, amount, &cap[2])
        });
        collect(&mut results, &NEXT_PERIOD_PATTERN, text, |cap| {
            offset(today, 1, &cap[1])
        });
        collect(&mut results, &END_OF_PATTERN, text, |cap| {
            match cap[1].to_lowercase().as_str() {
                "week" => end_of_week(today),
                "month" => end_of_month(today),
                "year" => NaiveDate::from_ymd_opt(today.year(), 12, 31),
                _ => None,
            }
        });

        // Earliest first; of two matches starting together the longer wins.
        results.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        remove_overlaps(&mut results);
        results
    }
}

fn collect<F>(results: &mut Vec<DateMatch>, pattern: &Regex, text: &str, resolve: F)
where
    F: Fn(&Captures<'_>) -> Option<NaiveDate>,
{
    for cap in pattern.captures_iter(text) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        if let Some(date) = resolve(&cap) {
            results.push(DateMatch {
                matched: full_match.as_str().to_string(),
                date,
                start: full_match.start(),
                end: full_match.end(),
            });
        }
    }
}

/// Numeric `a/b/year` dates, also with `-` or `.` separators.
fn numeric_dates(text: &str) -> Vec<DateMatch> {
    let candidates: Vec<_> = NUMERIC_PATTERN
        .captures_iter(text)
        .filter_map(|cap| {
            let full_match = cap.get(0)?;
            let first: u32 = cap[1].parse().ok()?;
            let second: u32 = cap[2].parse().ok()?;
            let year: i32 = cap[3].parse().ok()?;
            let year = if year < 100 { 2000 + year } else { year };
            Some((full_match, first, second, year))
        })
        .collect();

    let day_first = candidates.iter().any(|&(_, first, second, year)| {
        NaiveDate::from_ymd_opt(year, first, second).is_none()
            && NaiveDate::from_ymd_opt(year, second, first).is_some()
    });

    candidates
        .into_iter()
        .filter_map(|(full_match, first, second, year)| {
            let (month, day) = if day_first {
                (second, first)
            } else {
                (first, second)
            };
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .or_else(|| NaiveDate::from_ymd_opt(year, day, month))?;
            Some(DateMatch {
                matched: full_match.as_str().to_string(),
                date,
                start: full_match.start(),
                end: full_match.end(),
            })
        })
        .collect()
}

/// `today` moved forward by `amount` of `unit` ("day", "weeks", ...).
fn offset(today: NaiveDate, amount: u32, unit: &str) -> Option<NaiveDate> {
    let unit = unit.to_lowercase();
    match unit.trim_end_matches('s') {
        "day" => today.checked_add_days(Days::new(amount.into())),
        "week" => today.checked_add_days(Days::new(u64::from(amount) * 7)),
        "month" => today.checked_add_months(Months::new(amount)),
        "year" => today.checked_add_months(Months::new(amount.checked_mul(12)?)),
        _ => None,
    }
}

/// Drop matches that overlap an earlier kept match.
fn remove_overlaps(results: &mut Vec<DateMatch>) {
    let mut last_end = 0;
    results.retain(|m| {
        if m.start < last_end {
            false
        } else {
            last_end = m.end;
            true
        }
    });
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn month_date(month: &str, day: &str, year: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let year = match year {
        Some(y) => y.parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month_number(month)?, day.parse().ok()?)
}

/// Next occurrence of `target`, counting today unless `skip_today` is set.
fn upcoming_weekday(today: NaiveDate, target: Weekday, skip_today: bool) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    let mut days_ahead = (7 + wanted - current) % 7;
    if days_ahead == 0 && skip_today {
        days_ahead = 7;
    }
    today.checked_add_days(Days::new(days_ahead.into()))
}

/// The Sunday closing the current week.
fn end_of_week(today: NaiveDate) -> Option<NaiveDate> {
    let days_until_sunday = 6 - today.weekday().num_days_from_monday();
    today.checked_add_days(Days::new(days_until_sunday.into()))
}

fn end_of_month(today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}
