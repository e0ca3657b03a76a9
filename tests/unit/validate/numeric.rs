use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn opacity_bounds() {
    for ok in ["0.0", "0.5", "1.0"] {
        assert!(validate_opacity(ok).is_ok(), "{ok}");
    }
    for bad in ["-0.1", "1.5"] {
        assert_eq!(validate_opacity(bad).unwrap_err().kind(), ErrorKind::Range, "{bad}");
    }
}

#[test]
fn rotation_bounds() {
    assert_eq!(validate_rotation_value("3600").unwrap(), 3600.0);
    assert_eq!(validate_rotation_value("-3600").unwrap(), -3600.0);
    assert_eq!(
        validate_rotation_value("3601").unwrap_err().kind(),
        ErrorKind::Range
    );
}

#[test]
fn non_finite_values_are_range_errors() {
    for s in ["NaN", "inf", "-inf"] {
        assert_eq!(validate_opacity(s).unwrap_err().kind(), ErrorKind::Range, "{s}");
    }
}

#[test]
fn garbage_is_a_construction_error() {
    assert_eq!(
        validate_font_size("big").unwrap_err().kind(),
        ErrorKind::Construction
    );
}

#[test]
fn font_size_lower_bound_is_open() {
    assert!(validate_font_size("0").is_err());
    assert!(validate_font_size("0.01").is_ok());
    assert!(validate_font_size("2000").is_ok());
    assert!(validate_font_size("2000.5").is_err());
}

#[test]
fn line_spacing_bounds() {
    assert!(validate_line_spacing("0.1").is_ok());
    assert!(validate_line_spacing("0.09").is_err());
    assert!(validate_line_spacing("20").is_ok());
}

#[test]
fn pair_fields_report_component() {
    assert_eq!(validate_scale("1 2").unwrap(), Vec2::new(1.0, 2.0));
    let err = validate_scale("1 0").unwrap_err();
    assert_eq!(err.field(), Some("scale.y"));
    assert!(validate_scale("1").is_err());
    assert!(validate_position("-50000 50000").is_ok());
    assert!(validate_position("50001 0").is_err());
    assert!(validate_anchor("5 -5").is_ok());
    assert!(validate_anchor("0 5.5").is_err());
}

#[test]
fn color_components() {
    assert_eq!(validate_color("1 0.5 0").unwrap().components().len(), 3);
    assert!(validate_color("1 0.5 0 1").is_ok());
    assert!(validate_color("1 0.5").is_err());
    assert!(validate_color("1 0.5 0 1 1").is_err());
    assert!(validate_color("1 2 0").is_err());
}

#[test]
fn lane_and_time_fields() {
    assert_eq!(validate_lane("-100").unwrap().get(), -100);
    assert_eq!(validate_lane("101").unwrap_err().kind(), ErrorKind::Range);
    let t = validate_time_field("offset", "5s").unwrap();
    assert_eq!(t.frames(), 120);
    let err = validate_time_field("offset", "-1s").unwrap_err();
    assert_eq!(err.field(), Some("offset"));
}
