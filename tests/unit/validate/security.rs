use super::*;
use crate::foundation::error::ErrorKind;

fn rejected(text: &str) -> bool {
    match validate_text_content(text) {
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::Security, "{text:?}: {e}");
            true
        }
        Ok(()) => false,
    }
}

#[test]
fn plain_text_is_accepted() {
    for ok in [
        "Hello World",
        "Chapter 1: The Beginning",
        "Tabs\tand\nnewlines\r\n",
        "Medieval (1200-1400)",
        "Caf\u{e9} \u{4e16}\u{754c}",
        "50% off, 100% fun",
    ] {
        assert!(validate_text_content(ok).is_ok(), "{ok:?}");
    }
}

#[test]
fn script_markers_are_rejected() {
    for bad in [
        "javascript:alert(1)",
        "<script>",
        "JaVaScRiPt:void(0)",
        "java script:alert(1)",
        "vbscript:msgbox",
        "data:text/html,<b>",
        "x = eval(y)",
        "width: expression(alert(1))",
        "<img src=x onerror=alert(1)>",
        "<body onload = go()>",
    ] {
        assert!(rejected(bad), "{bad:?}");
    }
}

#[test]
fn percent_encoded_markers_are_rejected() {
    assert!(rejected("%3Cscript%3E"));
    assert!(rejected("%253Cscript%253E"));
    assert!(rejected("%00"));
}

#[test]
fn lookup_markers_are_rejected() {
    assert!(rejected("${jndi:ldap://x}"));
    assert!(rejected("jndi:rmi://host/a"));
}

#[test]
fn control_characters_are_rejected() {
    assert!(rejected("abc\0def"));
    assert!(rejected("bell\u{7}"));
    assert!(rejected("del\u{7f}"));
}

#[test]
fn entities_are_rejected() {
    assert!(rejected("&#60;b&#62;"));
    assert!(rejected("&#x3c;"));
    assert!(rejected("javascript&colon;x"));
    assert!(rejected("&lt;b&gt;"));
    assert!(validate_text_content("&#233;t&#233;").is_ok());
}

#[test]
fn traversal_and_system_paths_are_rejected() {
    assert!(rejected("../../secret"));
    assert!(rejected("..\\windows"));
    assert!(rejected("see /etc/passwd"));
    assert!(rejected("C:\\Windows\\system.ini"));
    assert!(rejected("\\\\server\\share"));
}

#[test]
fn namespaced_template_prefix_is_not_traversal() {
    assert!(validate_text_content(".../Titles.localized/Basic Text.localized/Text.moti").is_ok());
    assert!(rejected(".../../escape"));
}

#[test]
fn spoofing_code_points_are_rejected() {
    assert!(rejected("\u{feff}title"));
    assert!(rejected("abc\u{202e}cba"));
    assert!(rejected("zero\u{200b}width"));
    assert!(rejected("mark\u{200f}ed"));
}

#[test]
fn joiners_are_accepted() {
    let family = "Family \u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}";
    assert!(validate_text_content(family).is_ok());
    let persian = "\u{645}\u{6cc}\u{200c}\u{62e}\u{648}\u{627}\u{647}\u{645}";
    assert!(validate_text_content(persian).is_ok());
    assert!(rejected("%E2%80%8Bhidden"));
}

#[test]
fn length_is_capped() {
    let long = "a".repeat(MAX_TEXT_LEN + 1);
    assert!(rejected(&long));
    assert!(validate_text_content(&"a".repeat(MAX_TEXT_LEN)).is_ok());
}

#[test]
fn field_attribution() {
    let err = validate_text_field("title.text", "<script>").unwrap_err();
    assert_eq!(err.field(), Some("title.text"));
}

#[test]
fn font_names() {
    assert!(validate_font_name("Helvetica Neue").is_ok());
    assert!(validate_font_name("Futura-Bold_2 (Display).otf").is_ok());
    assert!(validate_font_name("").is_err());
    assert!(validate_font_name("Bad;Font").is_err());
    assert!(validate_font_name("<script>").is_err());
    assert!(validate_font_name(&"F".repeat(MAX_FONT_NAME_LEN + 1)).is_err());
}

#[test]
fn media_paths() {
    assert!(validate_media_path("/Users/me/Movies/clip.mov").is_ok());
    assert!(validate_media_path("relative/clip.mov").is_ok());
    assert!(validate_media_path("/a/../b.mov").is_err());
    assert!(validate_media_path("/a/%2e%2e/b.mov").is_err());
    assert!(validate_media_path("/etc/passwd").is_err());
    assert!(validate_media_path("/a/b\0.mov").is_err());
}
