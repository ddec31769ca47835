//! The extraction cascade: range, then single date, then fallback search.

use chrono::{Datelike, Local, NaiveDateTime};

use super::fallback::{fallback_search, DateSearch};
use super::normalize::strip_ordinals;
use super::range::find_range;
use super::single::find_single;
use super::temporal::TemporalSearch;
use super::types::{DateSpan, ExtractionResult, ExtractionStage};
use crate::config::ExtractionConfig;
use crate::utils::truncate_str;

/// Extracts a begin/end date pair from free-form text.
///
/// The extractor holds no mutable state, so one instance can be shared
/// across threads.
pub struct DateExtractor<S = TemporalSearch> {
    search: S,
    fallback_enabled: bool,
    max_input_len: Option<usize>,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DateExtractor {
    /// Create an extractor backed by the built-in [`TemporalSearch`].
    pub fn new() -> Self {
        Self::with_search(TemporalSearch::new())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let mut extractor = Self::new().with_fallback(config.fallback_enabled);
        extractor.max_input_len = config.max_input_len;
        extractor
    }
}

impl<S: DateSearch> DateExtractor<S> {
    /// Create an extractor with a custom fallback search.
    pub fn with_search(search: S) -> Self {
        let defaults = ExtractionConfig::default();
        Self {
            search,
            fallback_enabled: defaults.fallback_enabled,
            max_input_len: defaults.max_input_len,
        }
    }

    /// Enable or disable the fallback search stage.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Limit how many bytes of input are examined. Input is unbounded by default.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = Some(max_input_len);
        self
    }

    /// Extract dates relative to the current local time.
    pub fn extract_now(&self, text: &str) -> ExtractionResult {
        self.extract(text, Local::now().naive_local())
    }

    /// Extract dates from `text`.
    ///
    /// `now` supplies the default year for structural patterns that omit one
    /// and the anchor for relative expressions in the fallback search.
    pub fn extract(&self, text: &str, now: NaiveDateTime) -> ExtractionResult {
        let text = match self.max_input_len {
            Some(max) if text.len() > max => {
                tracing::warn!(len = text.len(), max, "Input too long, truncating");
                truncate_str(text, max)
            }
            _ => text,
        };

        let normalized = strip_ordinals(text);
        let year = now.year();

        let result = find_range(&normalized, year)
            .map(|(begin, end)| (DateSpan::new(begin, end), ExtractionStage::Range))
            .or_else(|| {
                find_single(&normalized, year)
                    .map(|date| (DateSpan::single(date), ExtractionStage::Single))
            })
            .or_else(|| {
                // The fallback reads the original text, ordinals included.
                self.fallback_enabled
                    .then(|| fallback_search(&self.search, text, now))
                    .flatten()
                    .map(|span| (span, ExtractionStage::Fallback))
            });

        match result {
            Some((span, stage)) => {
                tracing::debug!(?stage, begin = %span.begin, end = %span.end, "Dates extracted");
                ExtractionResult::found(span, stage)
            }
            None => {
                tracing::debug!("No dates found");
                ExtractionResult::none()
            }
        }
    }
}

/// Extract `(begin_date, end_date)` from `text` using the current local time.
pub fn extract_dates(text: &str) -> (Option<String>, Option<String>) {
    DateExtractor::new().extract_now(text).as_pair()
}
