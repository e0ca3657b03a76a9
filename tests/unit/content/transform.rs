use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn default_is_identity() {
    let t = Transform::default();
    assert!(t.is_identity());
    assert!(t.validate_ranges("xf").is_ok());
    assert_eq!(t.wire(), ["0 0", "1 1", "0", "0 0"].map(String::from));
}

#[test]
fn builder_sets_fields() {
    let t = Transform::default().at(10.0, -20.5).scaled(2.0, 2.0).rotated(45.0);
    assert!(!t.is_identity());
    assert_eq!(t.wire()[0], "10 -20.5");
    assert!(t.validate_ranges("xf").is_ok());
}

#[test]
fn out_of_range_components_are_attributed() {
    let err = Transform::default()
        .scaled(0.0, 1.0)
        .validate_ranges("xf")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("xf.scale.x"));

    let err = Transform::default()
        .rotated(3600.5)
        .validate_ranges("xf")
        .unwrap_err();
    assert_eq!(err.field(), Some("xf.rotation"));

    let err = Transform::default()
        .anchored(0.0, f64::INFINITY)
        .validate_ranges("xf")
        .unwrap_err();
    assert_eq!(err.field(), Some("xf.anchor.y"));
}
