//! leave-extract: begin/end date extraction for informal leave requests.
//!
//! Pulls a date range out of chat-style messages ("24-25 april",
//! "30 Apr to 1st May", "next friday") through a cascade of structural
//! patterns with a natural-language fallback, and assembles the leave
//! details (type, dates, reason) for an already classified message.

pub mod config;
pub mod dates;
pub mod error;
pub mod leave;
pub mod message;
pub mod utils;

pub use config::{Config, ExtractionConfig, MessageConfig};
pub use dates::{
    extract_dates, DateExtractor, DateMatch, DateSearch, DateSpan, ExtractionResult,
    ExtractionStage, TemporalSearch,
};
pub use error::{ConfigError, LeaveError, Result};
pub use leave::{extract_leave_type, extract_reason, LeaveType};
pub use message::{Entities, IntentPrediction, LeaveEntities, MessageProcessor, MessageResponse};
