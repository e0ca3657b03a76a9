use super::*;
use crate::document::config::DocumentConfig;
use crate::foundation::core::Lane;
use crate::foundation::error::ErrorKind;
use crate::resources::model::{AssetSpec, EffectSpec, FormatSpec};
use crate::resources::registry::ResourceRegistry;
use crate::time::rational::Rational;
use crate::time::value::TimeValue;
use crate::timeline::element::TimelineElement;
use crate::validate::pipeline::ValidationPipeline;

fn secs(s: f64) -> TimeValue {
    TimeValue::from_seconds(s).unwrap()
}

fn hd() -> FormatSpec {
    FormatSpec::video(1280, 720, Rational::parse("1001/30000s").unwrap())
}

#[test]
fn committed_pairs_are_rechecked() {
    let mut reg = ResourceRegistry::new();
    let mut tx = reg.begin();
    let ids = tx.reserve_ids(2).unwrap();
    tx.create_format(ids[0], hd()).unwrap();
    tx.create_asset(
        ids[1],
        AssetSpec::video("clip", "/m/clip.mov", secs(5.0)).with_format(ids[0]),
    )
    .unwrap();
    tx.commit().unwrap();

    for res in reg.resources() {
        assert!(check_resource_media(res, &reg).is_ok());
    }
}

#[test]
fn format_reference_to_an_effect_is_a_media_error() {
    let mut reg = ResourceRegistry::new();
    let mut tx = reg.begin();
    let ids = tx.reserve_ids(2).unwrap();
    tx.create_effect(ids[0], EffectSpec::new("Blur", "FFGaussianBlur"))
        .unwrap();
    let err = tx
        .create_asset(
            ids[1],
            AssetSpec::video("clip", "/m/clip.mov", secs(5.0)).with_format(ids[0]),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MediaConstraint);
}

#[test]
fn clip_cannot_outrun_its_source() {
    let mut doc = Document::new(DocumentConfig::default()).unwrap();
    let mut tx = doc.begin();
    let ids = tx.reserve_ids(2).unwrap();
    tx.create_format(ids[0], hd()).unwrap();
    tx.create_asset(ids[1], AssetSpec::video("short", "/m/short.mov", secs(2.0)))
        .unwrap();
    tx.commit().unwrap();

    let seq = doc.add_sequence("Main", ids[0], secs(10.0)).unwrap();
    let el = TimelineElement::new(
        "long",
        TimeValue::ZERO,
        secs(4.0),
        Lane::PRIMARY,
        ElementKind::AssetClip { asset: ids[1] },
    )
    .unwrap();
    doc.place(seq, el).unwrap();

    let err = MediaConstraintValidator.validate(&doc).unwrap_err();
    assert_eq!(err.field(), Some("long.duration"));
    assert!(doc.finalize(&ValidationPipeline::standard()).is_err());
    assert!(doc.finalize(&ValidationPipeline::empty()).is_ok());
}
