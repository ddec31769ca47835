//! Small string helpers shared by the extraction stages.

/// Truncate a string to at most `max_len` bytes without splitting a UTF-8 character.
#[inline]
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_len)
        .last()
        .unwrap_or(0);
    &s[..end]
}

/// Whether a captured group is made of ASCII digits only.
#[inline]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
