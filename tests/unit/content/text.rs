use super::*;
use crate::foundation::error::ErrorKind;
use crate::validate::security::MAX_TEXT_LEN;

#[test]
fn alignment_wire_round_trip() {
    for a in [
        TextAlignment::Left,
        TextAlignment::Center,
        TextAlignment::Right,
        TextAlignment::Justified,
    ] {
        assert_eq!(TextAlignment::from_wire(a.wire()), Some(a));
    }
    assert_eq!(TextAlignment::from_wire("Center"), Some(TextAlignment::Center));
    assert_eq!(TextAlignment::from_wire("middle"), None);
}

#[test]
fn style_ranges() {
    let style = TextStyle::new("Futura").with_size(72.0).with_line_spacing(1.2);
    assert!(style.validate_ranges("title").is_ok());

    let err = TextStyle::new("Futura")
        .with_size(0.0)
        .validate_ranges("title")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("title.font_size"));

    let err = TextStyle::new("Futura")
        .with_line_spacing(25.0)
        .validate_ranges("title")
        .unwrap_err();
    assert_eq!(err.field(), Some("title.line_spacing"));
}

#[test]
fn title_security() {
    assert!(TitleText::new("Hello World").validate_security("t", MAX_TEXT_LEN).is_ok());

    let err = TitleText::new("<script>x</script>")
        .validate_security("t", MAX_TEXT_LEN)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Security);
    assert_eq!(err.field(), Some("t.text"));

    let err = TitleText::new("ok")
        .with_style(TextStyle::new("Bad;Font"))
        .validate_security("t", MAX_TEXT_LEN)
        .unwrap_err();
    assert_eq!(err.field(), Some("t.font"));
}

#[test]
fn title_text_respects_tighter_cap() {
    let title = TitleText::new("Twelve chars");
    assert!(title.validate_security("t", 12).is_ok());
    let err = title.validate_security("t", 11).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Security);
    assert_eq!(err.field(), Some("t.text"));
}
