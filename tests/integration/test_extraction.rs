//! End-to-end date extraction tests.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use leave_extract::{extract_dates, DateExtractor, ExtractionStage};

/// 2025-06-11 is a Wednesday.
fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 11)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

fn pair(text: &str) -> (Option<String>, Option<String>) {
    DateExtractor::new().extract(text, fixed_now()).as_pair()
}

fn both(begin: &str, end: &str) -> (Option<String>, Option<String>) {
    (Some(begin.to_string()), Some(end.to_string()))
}

#[test]
fn test_structural_examples() {
    let cases = [
        ("24-25 april 2025", both("2025-04-24", "2025-04-25")),
        ("apr 24-25 2025", both("2025-04-24", "2025-04-25")),
        ("30 Apr to 1st May", both("2025-04-30", "2025-05-01")),
        ("24 apr", both("2025-04-24", "2025-04-24")),
        ("24th to 25th apr", both("2025-04-24", "2025-04-25")),
        ("Please grant leave on 2nd July", both("2025-07-02", "2025-07-02")),
        ("need CL Dec 22 - 24", both("2025-12-22", "2025-12-24")),
    ];

    for (text, expected) in cases {
        assert_eq!(pair(text), expected, "text: {text}");
    }
}

#[test]
fn test_no_date_information() {
    for text in [
        "",
        "hi",
        "can you apply leave for me",
        "I am not feeling well",
        "!!! ??? ...",
    ] {
        assert_eq!(pair(text), (None, None), "text: {text}");
    }
}

#[test]
fn test_relative_expressions_use_fallback() {
    let extractor = DateExtractor::new();

    let result = extractor.extract("leave tomorrow please", fixed_now());
    assert_eq!(result.stage(), Some(ExtractionStage::Fallback));
    assert_eq!(result.as_pair(), both("2025-06-12", "2025-06-12"));

    let result = extractor.extract("off from tomorrow till next monday", fixed_now());
    assert_eq!(result.as_pair(), both("2025-06-12", "2025-06-16"));

    // A third date is dropped; the repeat of the first collapses.
    let result = extractor.extract("today, today, friday and in 2 weeks", fixed_now());
    assert_eq!(result.as_pair(), both("2025-06-11", "2025-06-13"));
}

#[test]
fn test_day_first_numeric_dates() {
    let cases = [
        ("leave on 24/04/2025", both("2025-04-24", "2025-04-24")),
        ("leave on 24-04-2025", both("2025-04-24", "2025-04-24")),
        ("leave on 24.04.2025", both("2025-04-24", "2025-04-24")),
        ("leave from 12/06/2025 to 14/06/2025", both("2025-06-12", "2025-06-14")),
    ];

    for (text, expected) in cases {
        assert_eq!(pair(text), expected, "text: {text}");
    }
}

#[test]
fn test_week_offsets() {
    assert_eq!(pair("leave next week"), both("2025-06-18", "2025-06-18"));
    assert_eq!(pair("off in a week"), both("2025-06-18", "2025-06-18"));
}

#[test]
fn test_long_input_is_not_truncated() {
    let text = format!("{} 24 apr", "x ".repeat(6000));
    assert_eq!(pair(&text), both("2025-04-24", "2025-04-24"));
}

#[test]
fn test_fallback_sees_ordinals_in_original_text() {
    // No structural pattern: the ordinal is followed by "of".
    assert_eq!(
        pair("leave on the 3rd of march"),
        both("2025-03-03", "2025-03-03")
    );
}

#[test]
fn test_range_beats_single_date() {
    let result = DateExtractor::new().extract("24 to 25 apr", fixed_now());
    assert_eq!(result.stage(), Some(ExtractionStage::Range));
    assert_eq!(result.as_pair(), both("2025-04-24", "2025-04-25"));
}

#[test]
fn test_invalid_calendar_date_is_not_an_error() {
    // 31 April does not exist; the structural stages yield nothing and the
    // fallback finds no valid date either.
    assert_eq!(pair("31 april"), (None, None));
}

#[test]
fn test_both_or_neither() {
    for text in ["24 apr", "tomorrow", "", "30-31 apr", "apr 24-25 2025"] {
        let (begin, end) = pair(text);
        assert_eq!(begin.is_some(), end.is_some(), "text: {text}");
    }
}

#[test]
fn test_output_round_trips_through_iso_parsing() {
    let (begin, end) = pair("28 feb to 1 mar 2024");
    let begin = NaiveDate::parse_from_str(&begin.unwrap(), "%Y-%m-%d").unwrap();
    let end = NaiveDate::parse_from_str(&end.unwrap(), "%Y-%m-%d").unwrap();
    assert_eq!(begin, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn test_idempotent_for_fixed_clock() {
    let extractor = DateExtractor::new();
    for text in ["30 Apr to 1st May", "next friday", "nothing here"] {
        assert_eq!(
            extractor.extract(text, fixed_now()),
            extractor.extract(text, fixed_now())
        );
    }
}

#[test]
fn test_extract_dates_defaults_to_current_year() {
    let year = Local::now().year();
    assert_eq!(
        extract_dates("24 apr"),
        both(&format!("{year}-04-24"), &format!("{year}-04-24"))
    );
}

#[test]
fn test_shared_across_threads() {
    let extractor = std::sync::Arc::new(DateExtractor::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = extractor.clone();
            std::thread::spawn(move || extractor.extract("apr 24-25 2025", fixed_now()).as_pair())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), both("2025-04-24", "2025-04-25"));
    }
}
