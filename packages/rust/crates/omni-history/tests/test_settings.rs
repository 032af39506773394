//! Integration tests for HistorySettings and the Turn wire format.

use omni_history::{HistoryError, HistorySettings, Turn};

#[test]
fn test_parse_ignored_user_messages() {
    let raw = "ignored_user_messages:\n  - continue\n  - \"  go on  \"\n";
    let settings = HistorySettings::from_yaml_str(raw).unwrap();
    assert_eq!(
        settings.ignored_user_messages,
        Some(vec!["continue".to_string(), "  go on  ".to_string()])
    );
}

#[test]
fn test_missing_key_and_empty_document_yield_defaults() {
    assert_eq!(
        HistorySettings::from_yaml_str("other: 1\n").unwrap(),
        HistorySettings::default()
    );
    assert_eq!(
        HistorySettings::from_yaml_str("  \n").unwrap(),
        HistorySettings::default()
    );
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let err = HistorySettings::from_yaml_str("ignored_user_messages: [unterminated").unwrap_err();
    assert!(matches!(err, HistoryError::InvalidSettings(_)));
    assert!(err.to_string().starts_with("invalid history settings"));
}

#[test]
fn test_wrong_shape_is_an_error() {
    assert!(HistorySettings::from_yaml_str("ignored_user_messages: 3\n").is_err());
}

#[test]
fn test_parse_or_default_falls_back() {
    let settings = HistorySettings::parse_or_default("ignored_user_messages: {", "user");
    assert_eq!(settings, HistorySettings::default());
}

#[test]
fn test_merge_overlay_wins_when_set() {
    let system = HistorySettings::with_ignored_user_messages(["continue"]);
    let user = HistorySettings::with_ignored_user_messages(["go on"]);
    assert_eq!(system.clone().merge(user.clone()), user);
    assert_eq!(system.clone().merge(HistorySettings::default()), system);
}

#[test]
fn test_turn_json_wire_format() {
    let turn = Turn::assistant("hi");
    let value = serde_json::to_value(&turn).unwrap();
    assert_eq!(value, serde_json::json!({"role": "assistant", "content": "hi"}));

    let parsed: Turn = serde_json::from_str(r#"{"role":"system","content":"rules"}"#).unwrap();
    assert_eq!(parsed, Turn::new("system", "rules"));
    assert!(!parsed.is_assistant());
}
