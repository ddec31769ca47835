//! Begin/end date extraction from informal text.
//!
//! # Architecture
//!
//! ```text
//! Raw text
//!       │
//!       ▼
//! ┌────────────────┐
//! │   Normalizer   │  "1st" → "1"
//! └────────────────┘
//!       │
//!       ▼
//! ┌────────────────┐   ┌──────────────┐
//! │ Range patterns │──▶│ Date builder │
//! └────────────────┘   └──────────────┘
//!       │ no match            ▲
//!       ▼                     │
//! ┌────────────────┐          │
//! │ Single patterns│──────────┘
//! └────────────────┘
//!       │ no match
//!       ▼
//! ┌────────────────┐
//! │ Fallback search│  (original text, relative to "now")
//! └────────────────┘
//!       │
//!       ▼
//! (begin_date, end_date)
//! ```
//!
//! Structural patterns run first because they rarely misfire; the
//! fallback search is the most permissive stage and runs last.

mod builder;
mod extractor;
mod fallback;
mod normalize;
mod range;
mod single;
mod temporal;
mod types;

pub use builder::{build_date, Arrangement, DateFormat, MonthStyle, DATE_FORMATS};
pub use extractor::{extract_dates, DateExtractor};
pub use fallback::{fallback_search, reduce_matches, DateMatch, DateSearch};
pub use normalize::strip_ordinals;
pub use range::find_range;
pub use single::find_single;
pub use temporal::TemporalSearch;
pub use types::{DateSpan, ExtractionOutput, ExtractionResult, ExtractionStage, DATE_FORMAT};
