use super::*;
use crate::content::animation::{AnimatedParam, Curve, KeyframeTrack, ParamValue};
use crate::foundation::core::Lane;
use crate::foundation::error::ErrorKind;
use crate::resources::registry::ResourceRegistry;
use crate::time::value::TimeValue;

fn secs(s: f64) -> TimeValue {
    TimeValue::from_seconds(s).unwrap()
}

fn gap(id: &str, lane: i32) -> TimelineElement {
    TimelineElement::new(
        id,
        TimeValue::ZERO,
        secs(2.0),
        Lane::new(lane).unwrap(),
        ElementKind::Gap,
    )
    .unwrap()
}

#[test]
fn element_ids_must_be_tokens() {
    assert!(check_element_fields(&gap("g1", 0)).is_ok());
    assert!(check_element_fields(&gap("", 0)).is_err());
    assert_eq!(
        check_element_fields(&gap("two words", 0)).unwrap_err().field(),
        Some("element.id")
    );
}

#[test]
fn gaps_live_on_the_spine() {
    let err = check_element_fields(&gap("g1", 2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
    assert_eq!(err.field(), Some("g1.lane"));
}

#[test]
fn names_and_attribute_keys() {
    assert!(check_element_fields(&gap("g1", 0).with_name("  ")).is_err());
    assert!(check_element_fields(&gap("g1", 0).with_attribute("data-role", "x")).is_ok());
    let err = check_element_fields(&gap("g1", 0).with_attribute("1bad key", "x")).unwrap_err();
    assert_eq!(err.field(), Some("g1.attributes"));
}

#[test]
fn keyframes_are_checked_against_element_duration() {
    let track = KeyframeTrack::new(AnimatedParam::Opacity)
        .key(TimeValue::ZERO, ParamValue::Scalar(0.0), Curve::Linear)
        .key(secs(3.0), ParamValue::Scalar(1.0), Curve::Linear);
    let err = check_element_fields(&gap("g1", 0).with_animation(track)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("g1.amount[1]"));
}

#[test]
fn gap_has_no_reference_to_check() {
    let reg = ResourceRegistry::new();
    assert!(check_element_reference(&reg, &gap("g1", 0)).is_ok());
}

#[test]
fn dangling_reference_is_reported() {
    let mut reg = ResourceRegistry::new();
    let ids = reg.allocate_ids(1).unwrap();
    let el = TimelineElement::new(
        "c1",
        TimeValue::ZERO,
        secs(1.0),
        Lane::PRIMARY,
        ElementKind::AssetClip { asset: ids[0] },
    )
    .unwrap();
    let err = check_element_reference(&reg, &el).unwrap_err();
    assert_eq!(err.field(), Some("c1.ref"));
}
