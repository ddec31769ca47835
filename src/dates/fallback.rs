//! Fallback to a general-purpose natural-language date search.

use chrono::{NaiveDate, NaiveDateTime};

use super::types::DateSpan;

/// A date found by a [`DateSearch`], in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The substring that produced the date.
    pub matched: String,
    /// The resolved calendar date.
    pub date: NaiveDate,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends.
    pub end: usize,
}

/// A general-purpose date recognizer.
///
/// Implementations return every date they find in `text`, ordered by
/// position. `anchor` is the reference instant for relative expressions
/// such as "tomorrow" or "next friday" and for years left unstated.
pub trait DateSearch: Send + Sync {
    fn search(&self, text: &str, anchor: NaiveDateTime) -> Vec<DateMatch>;
}

impl<T: DateSearch + ?Sized> DateSearch for Box<T> {
    fn search(&self, text: &str, anchor: NaiveDateTime) -> Vec<DateMatch> {
        (**self).search(text, anchor)
    }
}

/// Run `search` over `text` and reduce its matches to a span.
pub fn fallback_search<S: DateSearch + ?Sized>(
    search: &S,
    text: &str,
    anchor: NaiveDateTime,
) -> Option<DateSpan> {
    let matches = search.search(text, anchor);
    tracing::debug!(count = matches.len(), "Fallback search finished");
    reduce_matches(&matches)
}

/// Collapse matches to distinct dates in first-occurrence order.
///
/// No dates gives `None`, one date is used as both begin and end, and with
/// two or more the first two become begin and end.
pub fn reduce_matches(matches: &[DateMatch]) -> Option<DateSpan> {
    let mut distinct: Vec<NaiveDate> = Vec::with_capacity(2);
    for m in matches {
        if !distinct.contains(&m.date) {
            distinct.push(m.date);
            if distinct.len() == 2 {
                break;
            }
        }
    }

    match distinct.as_slice() {
        [] => None,
        [only] => Some(DateSpan::single(*only)),
        [begin, end, ..] => Some(DateSpan::new(*begin, *end)),
    }
}
