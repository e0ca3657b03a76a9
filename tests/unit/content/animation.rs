use super::*;
use crate::foundation::error::ErrorKind;

fn secs(s: f64) -> TimeValue {
    TimeValue::from_seconds(s).unwrap()
}

fn fade() -> KeyframeTrack {
    KeyframeTrack::new(AnimatedParam::Opacity)
        .key(TimeValue::ZERO, ParamValue::Scalar(0.0), Curve::Linear)
        .key(secs(1.0), ParamValue::Scalar(1.0), Curve::Smooth)
}

#[test]
fn valid_track_passes() {
    let track = fade();
    assert!(track.validate_shape("anim", secs(2.0)).is_ok());
    assert!(track.validate_values("anim").is_ok());
}

#[test]
fn last_keyframe_may_sit_on_duration() {
    assert!(fade().validate_shape("anim", secs(1.0)).is_ok());
    let err = fade().validate_shape("anim", secs(0.5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("anim[1]"));
}

#[test]
fn times_must_strictly_ascend() {
    let track = KeyframeTrack::new(AnimatedParam::Rotation)
        .key(secs(1.0), ParamValue::Scalar(0.0), Curve::Linear)
        .key(secs(1.0), ParamValue::Scalar(90.0), Curve::Linear);
    let err = track.validate_shape("anim", secs(5.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

#[test]
fn empty_and_misshaped_tracks_fail() {
    assert!(
        KeyframeTrack::new(AnimatedParam::Scale)
            .validate_shape("anim", secs(1.0))
            .is_err()
    );
    let track = KeyframeTrack::new(AnimatedParam::Position).key(
        TimeValue::ZERO,
        ParamValue::Scalar(3.0),
        Curve::Hold,
    );
    assert!(track.validate_shape("anim", secs(1.0)).is_err());
}

#[test]
fn values_use_parameter_interval() {
    let track = KeyframeTrack::new(AnimatedParam::Opacity).key(
        TimeValue::ZERO,
        ParamValue::Scalar(1.5),
        Curve::Linear,
    );
    assert_eq!(track.validate_values("anim").unwrap_err().kind(), ErrorKind::Range);

    let track = KeyframeTrack::new(AnimatedParam::Scale).key(
        TimeValue::ZERO,
        ParamValue::Pair(Vec2::new(1.0, 0.0)),
        Curve::Linear,
    );
    assert_eq!(
        track.validate_values("anim").unwrap_err().field(),
        Some("anim[0].y")
    );
}

#[test]
fn wire_tokens() {
    assert_eq!(Curve::Hold.wire(), "hold");
    assert_eq!(AnimatedParam::Opacity.wire(), "amount");
    assert_eq!(ParamValue::Pair(Vec2::new(1.5, -2.0)).wire(), "1.5 -2");
}
