use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn defaults() {
    let cfg = DocumentConfig::default();
    assert_eq!(cfg.name, "Untitled");
    assert_eq!(cfg.max_text_len, MAX_TEXT_LEN);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = DocumentConfig::from_json_str(
        r#"{"name": "Promo", "timeline": {"allow_overlaps": true}}"#,
    )
    .unwrap();
    assert_eq!(cfg.name, "Promo");
    assert!(cfg.timeline.allow_overlaps);
    assert!(!cfg.timeline.allow_gaps);
    assert_eq!(cfg.timeline.max_lanes, 10);
}

#[test]
fn from_reader_matches_from_str() {
    let json = r#"{"name": "Reel", "max_text_len": 500}"#;
    let a = DocumentConfig::from_json_str(json).unwrap();
    let b = DocumentConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_configs_are_rejected() {
    assert_eq!(
        DocumentConfig::from_json_str("{not json").unwrap_err().kind(),
        ErrorKind::Construction
    );
    assert!(DocumentConfig::from_json_str(r#"{"name": " "}"#).is_err());
    assert_eq!(
        DocumentConfig::from_json_str(r#"{"max_text_len": 100001}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::Range
    );
    assert!(DocumentConfig::from_json_str(r#"{"timeline": {"max_lanes": 500}}"#).is_err());
}
