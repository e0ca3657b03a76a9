use super::*;
use crate::foundation::error::ErrorKind;

fn secs(s: f64) -> TimeValue {
    TimeValue::from_seconds(s).unwrap()
}

fn lane(n: i32) -> Lane {
    Lane::new(n).unwrap()
}

fn timeline(total: f64) -> TimelineValidator {
    TimelineValidator::new(secs(total), TimelineConfig::default()).unwrap()
}

#[test]
fn default_config() {
    let c = TimelineConfig::default();
    assert_eq!(c.max_lanes, 10);
    assert!(!c.allow_gaps);
    assert!(!c.allow_overlaps);
}

#[test]
fn config_deserializes_with_defaults() {
    let c: TimelineConfig = serde_json::from_str(r#"{"allow_gaps": true}"#).unwrap();
    assert!(c.allow_gaps);
    assert_eq!(c.max_lanes, 10);
}

#[test]
fn config_rejects_lane_limit_past_ceiling() {
    let config = TimelineConfig {
        max_lanes: 101,
        ..TimelineConfig::default()
    };
    assert_eq!(
        TimelineValidator::new(secs(1.0), config).unwrap_err().kind(),
        ErrorKind::Range
    );
}

#[test]
fn zero_length_timeline_is_rejected() {
    assert!(TimelineValidator::new(TimeValue::ZERO, TimelineConfig::default()).is_err());
}

#[test]
fn element_ending_at_total_is_contained() {
    let mut tl = timeline(10.0);
    assert!(
        tl.add_element("a", secs(9.5), secs(0.5), Lane::PRIMARY, ElementKind::Gap)
            .is_ok()
    );

    let err = tl
        .add_element("b", secs(9.5), secs(1.0), lane(1), ElementKind::Gap)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeline);
    assert_eq!(err.field(), Some("b"));
    let msg = err.to_string();
    assert!(msg.contains(&secs(10.5).to_string()), "{msg}");
    assert!(msg.contains(&secs(10.0).to_string()), "{msg}");
}

#[test]
fn lane_limit_is_enforced() {
    let mut tl = timeline(5.0);
    assert!(
        tl.add_element("ok", TimeValue::ZERO, secs(1.0), lane(-10), ElementKind::Gap)
            .is_ok()
    );
    let err = tl
        .add_element("high", TimeValue::ZERO, secs(1.0), lane(11), ElementKind::Gap)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeline);
}

#[test]
fn duplicate_ids_and_empty_ranges_are_rejected() {
    let mut tl = timeline(5.0);
    tl.add_element("a", TimeValue::ZERO, secs(1.0), lane(1), ElementKind::Gap)
        .unwrap();
    assert!(
        tl.add_element("a", secs(2.0), secs(1.0), lane(1), ElementKind::Gap)
            .is_err()
    );
    assert!(
        tl.add_element("z", secs(2.0), TimeValue::ZERO, lane(1), ElementKind::Gap)
            .is_err()
    );
}

#[test]
fn same_lane_overlap_is_rejected() {
    let mut tl = timeline(10.0);
    tl.add_element("a", TimeValue::ZERO, secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    tl.add_element("b", secs(3.0), secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    let err = tl.validate_complete().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeline);
    assert_eq!(err.field(), Some("b"));
}

#[test]
fn touching_ranges_do_not_overlap() {
    let mut tl = timeline(10.0);
    tl.add_element("b", secs(5.0), secs(3.0), lane(1), ElementKind::Gap)
        .unwrap();
    tl.add_element("a", TimeValue::ZERO, secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    assert!(tl.validate_complete().is_ok());
}

#[test]
fn overlap_on_different_lanes_is_fine() {
    let mut tl = timeline(10.0);
    tl.add_element("a", TimeValue::ZERO, secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    tl.add_element("b", secs(3.0), secs(5.0), lane(2), ElementKind::Gap)
        .unwrap();
    assert!(tl.validate_overlaps().is_ok());
}

#[test]
fn allow_overlaps_skips_the_check() {
    let config = TimelineConfig {
        allow_overlaps: true,
        ..TimelineConfig::default()
    };
    let mut tl = TimelineValidator::new(secs(10.0), config).unwrap();
    tl.add_element("a", TimeValue::ZERO, secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    tl.add_element("b", secs(3.0), secs(5.0), lane(1), ElementKind::Gap)
        .unwrap();
    assert!(tl.validate_complete().is_ok());
    assert!(tl.validate_overlaps().is_err());
}

#[test]
fn lane_gap_reports_missing_lane() {
    let mut tl = timeline(10.0);
    for (id, l) in [("a", 1), ("c", 3)] {
        tl.add_element(id, TimeValue::ZERO, secs(1.0), lane(l), ElementKind::Gap)
            .unwrap();
    }
    let err = tl.validate_lane_structure().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeline);
    assert_eq!(err.field(), Some("lane 2"));

    tl.add_element("b", TimeValue::ZERO, secs(1.0), lane(2), ElementKind::Gap)
        .unwrap();
    assert!(tl.validate_lane_structure().is_ok());
}

#[test]
fn negative_and_primary_lanes_are_outside_gap_rule() {
    let mut tl = timeline(10.0);
    for (id, l) in [("p", 0), ("n", -3)] {
        tl.add_element(id, TimeValue::ZERO, secs(1.0), lane(l), ElementKind::Gap)
            .unwrap();
    }
    assert!(tl.validate_lane_structure().is_ok());
}

#[test]
fn allow_gaps_skips_the_check() {
    let config = TimelineConfig {
        allow_gaps: true,
        ..TimelineConfig::default()
    };
    let mut tl = TimelineValidator::new(secs(10.0), config).unwrap();
    tl.add_element("c", TimeValue::ZERO, secs(1.0), lane(3), ElementKind::Gap)
        .unwrap();
    assert!(tl.validate_complete().is_ok());
}

#[test]
fn query_helpers() {
    let mut tl = timeline(10.0);
    tl.add_element("late", secs(6.0), secs(2.0), Lane::PRIMARY, ElementKind::Gap)
        .unwrap();
    tl.add_element("early", TimeValue::ZERO, secs(5.0), Lane::PRIMARY, ElementKind::Gap)
        .unwrap();
    tl.add_element("cap", secs(1.0), secs(1.0), lane(1), ElementKind::Gap)
        .unwrap();

    let spine: Vec<&str> = tl
        .elements_in_lane(Lane::PRIMARY)
        .iter()
        .map(|e| e.id())
        .collect();
    assert_eq!(spine, ["early", "late"]);

    let window = TimeRange::new(secs(4.0), secs(3.0)).unwrap();
    let hits: Vec<&str> = tl.elements_in_range(window).iter().map(|e| e.id()).collect();
    assert_eq!(hits, ["early", "late"]);

    let at_five = TimeRange::new(secs(5.0), secs(1.0)).unwrap();
    assert!(tl.elements_in_range(at_five).is_empty());

    let instant = TimeRange::new(secs(1.5), TimeValue::ZERO).unwrap();
    let hits: Vec<&str> = tl.elements_in_range(instant).iter().map(|e| e.id()).collect();
    assert_eq!(hits, ["early", "cap"]);
    assert_eq!(tl.get("cap").map(|e| e.lane()), Some(lane(1)));
    assert!(tl.elements_in_lane(lane(7)).is_empty());
}
