//! Leave types and keyword lookup.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Casual Leave")]
    Casual,
    #[serde(rename = "Sick Leave")]
    Sick,
    #[serde(rename = "Earned Leave")]
    Earned,
    #[serde(rename = "Maternity Leave")]
    Maternity,
    #[serde(rename = "Paternity Leave")]
    Paternity,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Casual => "Casual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Earned => "Earned Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Paternity => "Paternity Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    /// Accepts a keyword ("sick", "sl") or the full name ("Sick Leave").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LEAVE_KEYWORDS
            .iter()
            .find(|(keyword, leave_type)| {
                s.eq_ignore_ascii_case(keyword) || s.eq_ignore_ascii_case(leave_type.as_str())
            })
            .map(|(_, leave_type)| *leave_type)
            .ok_or_else(|| format!("unknown leave type: {}", s))
    }
}

/// Keywords in lookup order; the first one present in a message wins.
pub const LEAVE_KEYWORDS: [(&str, LeaveType); 10] = [
    ("casual", LeaveType::Casual),
    ("cl", LeaveType::Casual),
    ("sick", LeaveType::Sick),
    ("sl", LeaveType::Sick),
    ("earned", LeaveType::Earned),
    ("el", LeaveType::Earned),
    ("maternity", LeaveType::Maternity),
    ("ml", LeaveType::Maternity),
    ("paternity", LeaveType::Paternity),
    ("pl", LeaveType::Paternity),
];

static KEYWORD_PATTERNS: LazyLock<Vec<(Regex, LeaveType)>> = LazyLock::new(|| {
    LEAVE_KEYWORDS
        .iter()
        .map(|(keyword, leave_type)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
            (Regex::new(&pattern).expect("Invalid regex"), *leave_type)
        })
        .collect()
});

/// Find the leave type named in `text` as a whole word.
pub fn extract_leave_type(text: &str) -> Option<LeaveType> {
    KEYWORD_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, leave_type)| *leave_type)
}
