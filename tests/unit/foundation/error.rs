use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CutlineError::construction("f", "x")
            .to_string()
            .starts_with("construction error: f:")
    );
    assert!(
        CutlineError::media("f", "x")
            .to_string()
            .starts_with("media constraint violation: f:")
    );
    assert!(
        CutlineError::security("f", "x")
            .to_string()
            .starts_with("security violation: f:")
    );
    assert!(
        CutlineError::range("f", "x")
            .to_string()
            .starts_with("range violation: f:")
    );
    assert!(
        CutlineError::timeline("clip-1", "x")
            .to_string()
            .starts_with("timeline constraint violation: clip-1:")
    );
    assert!(
        CutlineError::external_tool("xmllint", "x")
            .to_string()
            .starts_with("external tool failure: xmllint:")
    );
}

#[test]
fn kind_tags_match_variants() {
    assert_eq!(CutlineError::range("a", "b").kind(), ErrorKind::Range);
    assert_eq!(CutlineError::security("a", "b").kind(), ErrorKind::Security);
    assert_eq!(
        CutlineError::transaction("aborted", CutlineError::media("format", "missing")).kind(),
        ErrorKind::Transaction
    );
}

#[test]
fn transaction_error_exposes_cause_field() {
    let err = CutlineError::transaction("aborted", CutlineError::media("asset.format", "missing"));
    assert_eq!(err.field(), Some("asset.format"));
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("missing"));
}

#[test]
fn at_field_rewrites_only_field_scoped_errors() {
    let err = CutlineError::range("value", "too large").at_field("title.font_size");
    assert_eq!(err.field(), Some("title.font_size"));

    let err = CutlineError::timeline("clip", "overlap").at_field("ignored");
    assert_eq!(err.field(), Some("clip"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CutlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
