//! Result types for date extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output format for extracted dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A begin/end pair of calendar dates. A single date has `begin == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// A span covering one day.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }
}

/// The cascade stage that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStage {
    /// A structural two-date range pattern.
    Range,
    /// A structural single-date pattern.
    Single,
    /// The general-purpose natural-language search.
    Fallback,
}

/// Begin and end dates extracted from a message.
///
/// Both dates are present or both are absent; the type holds at most one
/// span so a mixed pair cannot be represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "ExtractionOutput")]
pub struct ExtractionResult {
    span: Option<DateSpan>,
    stage: Option<ExtractionStage>,
}

impl ExtractionResult {
    pub fn found(span: DateSpan, stage: ExtractionStage) -> Self {
        Self {
            span: Some(span),
            stage: Some(stage),
        }
    }

    /// No date information could be recovered.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn span(&self) -> Option<DateSpan> {
        self.span
    }

    pub fn stage(&self) -> Option<ExtractionStage> {
        self.stage
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// Begin date formatted as `YYYY-MM-DD`.
    pub fn begin_date(&self) -> Option<String> {
        self.span.map(|s| s.begin.format(DATE_FORMAT).to_string())
    }

    /// End date formatted as `YYYY-MM-DD`.
    pub fn end_date(&self) -> Option<String> {
        self.span.map(|s| s.end.format(DATE_FORMAT).to_string())
    }

    /// The `(begin_date, end_date)` pair.
    pub fn as_pair(&self) -> (Option<String>, Option<String>) {
        (self.begin_date(), self.end_date())
    }
}

/// Serialized form of [`ExtractionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub stage: Option<ExtractionStage>,
}

impl From<ExtractionResult> for ExtractionOutput {
    fn from(result: ExtractionResult) -> Self {
        let (begin_date, end_date) = result.as_pair();
        Self {
            begin_date,
            end_date,
            stage: result.stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        let result = ExtractionResult::found(DateSpan::single(date), ExtractionStage::Single);
        assert_eq!(
            result.as_pair(),
            (Some("2025-04-05".to_string()), Some("2025-04-05".to_string()))
        );
    }

    #[test]
    fn test_none_is_both_absent() {
        let result = ExtractionResult::none();
        assert!(result.is_empty());
        assert_eq!(result.as_pair(), (None, None));
        assert_eq!(result.stage(), None);
    }

    #[test]
    fn test_serialize() {
        let begin = NaiveDate::from_ymd_opt(2025, 4, 24).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 25).unwrap();
        let result = ExtractionResult::found(DateSpan::new(begin, end), ExtractionStage::Range);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "begin_date": "2025-04-24",
                "end_date": "2025-04-25",
                "stage": "range",
            })
        );

        let json = serde_json::to_value(ExtractionResult::none()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "begin_date": null, "end_date": null, "stage": null })
        );
    }
}
