//! Message routing for an externally classified intent.
//!
//! Intent classification happens upstream; callers pass the predicted label
//! and confidence alongside the message, and get back a response envelope
//! with the extracted leave details.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::dates::DateExtractor;
use crate::error::{LeaveError, Result};
use crate::leave::{extract_leave_type, extract_reason, LeaveType};

pub const INTENT_APPLY_LEAVE: &str = "apply_leave";
pub const INTENT_GREETINGS: &str = "greetings";
pub const INTENT_GREETING_GENERAL: &str = "greeting_general";
pub const INTENT_UNKNOWN: &str = "unknown";

const FALLBACK_GREETING: &str = "Hello! 👋";
const UNKNOWN_RESPONSE: &str = "Sorry, I didn’t quite understand that.";

static GREETING_RESPONSES: [(&str, &[&str]); 4] = [
    (
        "greeting_morning",
        &[
            "Good morning! 🌞 Hope your day starts bright!",
            "Wishing you a refreshing morning! ☕",
            "Morning vibes! Let’s have a great day ahead.",
            "Hey, good morning! Ready to conquer the day?",
            "Rise and shine! 😊",
        ],
    ),
    (
        "greeting_afternoon",
        &[
            "Good afternoon! ☀️ Hope your day’s going well.",
            "Hi there, wishing you a productive afternoon!",
            "Hello! Hope you’re having a smooth afternoon.",
            "Hey! Keep shining this afternoon 🌟",
        ],
    ),
    (
        "greeting_evening",
        &[
            "Good evening! 🌇 How was your day?",
            "Hi, wishing you a peaceful evening.",
            "Evening vibes! Hope you had a good day.",
            "Hello! Relax and enjoy your evening 😊",
        ],
    ),
    (
        INTENT_GREETING_GENERAL,
        &[
            "Hello there! 👋",
            "Hey! Nice to hear from you.",
            "Hi! How can I assist you today?",
            "Hello! What would you like me to do?",
            "Hey buddy! 😊",
            "What's up?",
        ],
    ),
];

/// Intent predicted by an upstream classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPrediction {
    /// Top-level label, e.g. "apply_leave" or "greetings".
    pub label: String,
    /// Probability of the label (0.0-1.0).
    pub confidence: f32,
    /// Finer label for greetings, e.g. "greeting_morning".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
}

impl IntentPrediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
            sub_label: None,
        }
    }

    pub fn with_sub_label(mut self, sub_label: impl Into<String>) -> Self {
        self.sub_label = Some(sub_label.into());
        self
    }
}

/// Leave details extracted from an `apply_leave` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntities {
    pub leave_type: LeaveType,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub purpose: Option<String>,
    pub day_type: String,
}

/// Entities attached to a response; serialized as `{}` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entities {
    Leave(LeaveEntities),
    Empty {},
}

/// Response envelope for a processed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub intent: String,
    pub entities: Entities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl MessageResponse {
    fn unknown() -> Self {
        Self {
            intent: INTENT_UNKNOWN.to_string(),
            entities: Entities::Empty {},
            response: Some(UNKNOWN_RESPONSE.to_string()),
        }
    }

    /// Leave entities, when the message was a leave request.
    pub fn leave(&self) -> Option<&LeaveEntities> {
        match &self.entities {
            Entities::Leave(entities) => Some(entities),
            Entities::Empty {} => None,
        }
    }
}

/// Routes classified messages and extracts leave details.
pub struct MessageProcessor {
    extractor: DateExtractor,
    intent_threshold: f32,
    default_leave_type: LeaveType,
    day_type: String,
}

impl MessageProcessor {
    /// Create a processor from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: DateExtractor::from_config(&config.extraction),
            intent_threshold: config.message.intent_threshold,
            default_leave_type: config.message.default_leave_type()?,
            day_type: config.message.day_type.clone(),
        })
    }

    /// Process `message` given its predicted intent.
    ///
    /// `now` anchors date extraction. An empty message is rejected.
    pub fn process(
        &self,
        message: &str,
        prediction: &IntentPrediction,
        now: NaiveDateTime,
    ) -> Result<MessageResponse> {
        if message.trim().is_empty() {
            return Err(LeaveError::EmptyMessage);
        }

        if prediction.confidence < self.intent_threshold {
            tracing::debug!(
                label = %prediction.label,
                confidence = prediction.confidence,
                threshold = self.intent_threshold,
                "Intent below threshold"
            );
            return Ok(MessageResponse::unknown());
        }

        let response = match prediction.label.as_str() {
            INTENT_GREETINGS => self.greet(prediction.sub_label.as_deref()),
            INTENT_APPLY_LEAVE => self.leave_request(message, now),
            _ => MessageResponse::unknown(),
        };
        Ok(response)
    }

    fn greet(&self, sub_label: Option<&str>) -> MessageResponse {
        let intent = sub_label.unwrap_or(INTENT_GREETING_GENERAL);
        let response = greeting_responses(intent)
            .and_then(|responses| responses.choose(&mut rand::thread_rng()))
            .copied()
            .unwrap_or(FALLBACK_GREETING);

        MessageResponse {
            intent: intent.to_string(),
            entities: Entities::Empty {},
            response: Some(response.to_string()),
        }
    }

    fn leave_request(&self, message: &str, now: NaiveDateTime) -> MessageResponse {
        let (begin_date, end_date) = self.extractor.extract(message, now).as_pair();
        let entities = LeaveEntities {
            leave_type: extract_leave_type(message).unwrap_or(self.default_leave_type),
            begin_date,
            end_date,
            purpose: extract_reason(message),
            day_type: self.day_type.clone(),
        };

        MessageResponse {
            intent: INTENT_APPLY_LEAVE.to_string(),
            entities: Entities::Leave(entities),
            response: None,
        }
    }
}

/// Canned responses for a greeting sub-intent.
pub fn greeting_responses(intent: &str) -> Option<&'static [&'static str]> {
    GREETING_RESPONSES
        .iter()
        .find(|(name, _)| *name == intent)
        .map(|(_, responses)| *responses)
}
