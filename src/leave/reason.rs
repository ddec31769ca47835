//! Reason extraction from leave messages.
//!
//! Heuristics are tried in a fixed order: an explicit causal phrase, then a
//! known informal complaint, then whatever precedes the request verb when it
//! reads like a first-person explanation.

use std::sync::LazyLock;

use regex::Regex;

static CAUSAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:because(?: of)?|coz|cuz|cause|due to|as|since|for|so|that(?: is|'s|’s)? why|in order to|to|on account of)\s+(.*?)(?:[.,;!?]|$)",
    )
    .expect("Invalid regex")
});

static INFORMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(im\s+not\s+feeling\s+well|not\s+well|feeling\s+sick|ill|unwell|sick|tired|exhausted|headache|stomach\s+ache|fever|feeling\s+unwell|pls\s+apply|please\s+apply)",
    )
    .expect("Invalid regex")
});

const REQUEST_KEYWORDS: [&str; 4] = ["apply", "leave", "request", "grant"];

const EXPLANATION_PREFIXES: [&str; 9] = [
    "i ", "have to", "need to", "want to", "feeling", "went to", "going to", "not well", "im not",
];

/// Extract the stated reason for a leave request, if any.
pub fn extract_reason(text: &str) -> Option<String> {
    let text = text.trim();
    let lower = text.to_lowercase();

    causal_reason(&lower)
        .or_else(|| informal_reason(&lower))
        .or_else(|| explanation_prefix(text, &lower))
}

fn causal_reason(lower: &str) -> Option<String> {
    let caps = CAUSAL_PATTERN.captures(lower)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

fn informal_reason(lower: &str) -> Option<String> {
    let caps = INFORMAL_PATTERN.captures(lower)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

fn explanation_prefix(text: &str, lower: &str) -> Option<String> {
    let cut = REQUEST_KEYWORDS
        .iter()
        .filter_map(|keyword| lower.find(keyword))
        .min()
        .unwrap_or(lower.len());

    // Lowercasing can shift byte offsets for non-ASCII text.
    let prefix = text.get(..cut).unwrap_or(text).trim();
    let prefix_lower = prefix.to_lowercase();
    EXPLANATION_PREFIXES
        .iter()
        .any(|p| prefix_lower.starts_with(p))
        .then(|| prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_causal_phrase() {
        assert_eq!(
            extract_reason("Need leave because of fever."),
            Some("fever".to_string())
        );
        assert_eq!(
            extract_reason("Off on monday due to a family function, thanks"),
            Some("a family function".to_string())
        );
    }

    #[test]
    fn test_causal_phrase_is_lowercased() {
        assert_eq!(
            extract_reason("Leave please, COZ My Brother's Wedding"),
            Some("my brother's wedding".to_string())
        );
    }

    #[test]
    fn test_informal_phrase() {
        assert_eq!(
            extract_reason("feeling sick, cant come in"),
            Some("feeling sick".to_string())
        );
        assert_eq!(extract_reason("Headache!!"), Some("headache".to_string()));
    }

    #[test]
    fn test_explanation_before_request() {
        assert_eq!(
            extract_reason("I have a doctor appointment, apply leave"),
            Some("I have a doctor appointment,".to_string())
        );
    }

    #[test]
    fn test_no_reason() {
        assert_eq!(extract_reason(""), None);
        assert_eq!(extract_reason("leave on 24 apr"), None);
    }
}
