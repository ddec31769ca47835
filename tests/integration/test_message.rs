//! Message processing tests.

use chrono::{NaiveDate, NaiveDateTime};

use leave_extract::{Config, IntentPrediction, LeaveError, LeaveType, MessageProcessor};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 11)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

fn apply_leave() -> IntentPrediction {
    IntentPrediction::new("apply_leave", 0.92)
}

#[test]
fn test_leave_request_entities() {
    let processor = MessageProcessor::new(&Config::default()).unwrap();
    let response = processor
        .process(
            "pls apply earned leave 30 Apr - 1st May coz going home",
            &apply_leave(),
            fixed_now(),
        )
        .unwrap();

    let leave = response.leave().expect("leave entities");
    assert_eq!(leave.leave_type, LeaveType::Earned);
    assert_eq!(leave.begin_date.as_deref(), Some("2025-04-30"));
    assert_eq!(leave.end_date.as_deref(), Some("2025-05-01"));
    assert_eq!(leave.purpose.as_deref(), Some("going home"));
}

#[test]
fn test_leave_request_without_dates() {
    let processor = MessageProcessor::new(&Config::default()).unwrap();
    let response = processor
        .process("feeling sick, need a break", &apply_leave(), fixed_now())
        .unwrap();

    let leave = response.leave().unwrap();
    assert_eq!(leave.leave_type, LeaveType::Sick);
    assert_eq!(leave.begin_date, None);
    assert_eq!(leave.end_date, None);
    assert_eq!(leave.purpose.as_deref(), Some("feeling sick"));
}

#[test]
fn test_json_envelope() {
    let processor = MessageProcessor::new(&Config::default()).unwrap();
    let response = processor
        .process("leave on 24 apr", &apply_leave(), fixed_now())
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "intent": "apply_leave",
            "entities": {
                "leave_type": "Casual Leave",
                "begin_date": "2025-04-24",
                "end_date": "2025-04-24",
                "purpose": null,
                "day_type": "Full Day",
            },
        })
    );
}

#[test]
fn test_configured_defaults() {
    let config = Config::from_toml(
        r#"
        [extraction]
        fallback_enabled = false

        [message]
        intent_threshold = 0.95
        default_leave_type = "Sick Leave"
        day_type = "Half Day"
        "#,
    )
    .unwrap();
    let processor = MessageProcessor::new(&config).unwrap();

    // Below the raised threshold.
    let response = processor
        .process("leave tomorrow", &apply_leave(), fixed_now())
        .unwrap();
    assert_eq!(response.intent, "unknown");

    let confident = IntentPrediction::new("apply_leave", 0.99);
    let response = processor
        .process("leave tomorrow", &confident, fixed_now())
        .unwrap();
    let leave = response.leave().unwrap();
    assert_eq!(leave.leave_type, LeaveType::Sick);
    assert_eq!(leave.day_type, "Half Day");
    // Fallback disabled: "tomorrow" is not resolved.
    assert_eq!(leave.begin_date, None);
}

#[test]
fn test_empty_message_rejected() {
    let processor = MessageProcessor::new(&Config::default()).unwrap();
    let err = processor
        .process("", &apply_leave(), fixed_now())
        .unwrap_err();
    assert!(matches!(err, LeaveError::EmptyMessage));
}
