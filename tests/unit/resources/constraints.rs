use super::*;
use crate::foundation::error::ErrorKind;
use crate::foundation::ids::ResourceId;
use crate::resources::model::{AudioProps, AudioRate, ColorSpace};

fn secs(s: f64) -> TimeValue {
    TimeValue::from_seconds(s).unwrap()
}

fn ntsc() -> Rational {
    Rational::parse("1001/30000s").unwrap()
}

#[test]
fn image_spec_rules() {
    check_asset_spec(&AssetSpec::image("still", "/a/still.png")).unwrap();

    let mut spec = AssetSpec::image("still", "/a/still.png");
    spec.duration = secs(1.0);
    let err = check_asset_spec(&spec).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MediaConstraint);
    assert_eq!(err.field(), Some("asset.duration"));

    let spec = AssetSpec::image("still", "/a/still.png").with_audio(1, 2, 48_000);
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.audio")
    );

    let mut spec = AssetSpec::image("still", "/a/still.png");
    spec.audio_rate = Some(48_000);
    assert!(check_asset_spec(&spec).is_err());
}

#[test]
fn video_audio_fields_are_all_or_nothing() {
    check_asset_spec(&AssetSpec::video("clip", "/a/clip.mov", secs(5.0))).unwrap();
    check_asset_spec(&AssetSpec::video("clip", "/a/clip.mov", secs(5.0)).with_audio(1, 2, 48_000))
        .unwrap();

    let mut spec = AssetSpec::video("clip", "/a/clip.mov", secs(5.0));
    spec.audio_channels = Some(2);
    let err = check_asset_spec(&spec).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MediaConstraint);
    assert_eq!(err.field(), Some("asset.audio"));

    let mut spec = AssetSpec::video("clip", "/a/clip.mov", secs(5.0));
    spec.has_audio = true;
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.has_audio")
    );
}

#[test]
fn video_requires_duration_and_video_flag() {
    let spec = AssetSpec::video("clip", "/a/clip.mov", TimeValue::ZERO);
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.duration")
    );
    let mut spec = AssetSpec::video("clip", "/a/clip.mov", secs(1.0));
    spec.has_video = false;
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.has_video")
    );
}

#[test]
fn audio_spec_rules() {
    check_asset_spec(&AssetSpec::audio("vo", "/a/vo.wav", secs(3.0), 2, 48_000)).unwrap();

    let mut spec = AssetSpec::audio("vo", "/a/vo.wav", secs(3.0), 2, 48_000);
    spec.has_video = true;
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.has_video")
    );

    let mut spec = AssetSpec::audio("vo", "/a/vo.wav", secs(3.0), 2, 48_000);
    spec.audio_rate = None;
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.audio_rate")
    );

    let spec = AssetSpec::audio("vo", "/a/vo.wav", secs(3.0), 2, 12_345);
    assert_eq!(check_asset_spec(&spec).unwrap_err().kind(), ErrorKind::Range);

    let spec = AssetSpec::audio("vo", "/a/vo.wav", secs(3.0), 0, 48_000);
    assert_eq!(
        check_asset_spec(&spec).unwrap_err().field(),
        Some("asset.audio_channels")
    );
}

#[test]
fn format_frame_duration_rules() {
    check_format_spec(&FormatSpec::video(1920, 1080, ntsc())).unwrap();
    check_format_spec(&FormatSpec::image(4000, 3000)).unwrap();

    let mut spec = FormatSpec::image(4000, 3000);
    spec.frame_duration = Some(ntsc());
    assert_eq!(
        check_format_spec(&spec).unwrap_err().kind(),
        ErrorKind::MediaConstraint
    );

    let mut spec = FormatSpec::video(1920, 1080, ntsc());
    spec.frame_duration = None;
    assert_eq!(
        check_format_spec(&spec).unwrap_err().field(),
        Some("format.frame_duration")
    );

    let spec = FormatSpec::video(1920, 1080, Rational::ZERO);
    assert!(check_format_spec(&spec).is_err());

    let spec = FormatSpec::video(0, 1080, ntsc());
    assert_eq!(check_format_spec(&spec).unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn pair_check_matches_media_types() {
    let video = Asset {
        id: ResourceId::from_counter(2),
        name: "clip".to_owned(),
        src: "/a/clip.mov".to_owned(),
        media: MediaType::Video,
        start: TimeValue::ZERO,
        duration: secs(4.0),
        has_video: true,
        has_audio: true,
        format: Some(ResourceId::from_counter(1)),
        audio: Some(AudioProps {
            sources: 1,
            channels: 2,
            rate: AudioRate::Hz48000,
        }),
    };
    check_asset(&video).unwrap();

    let video_fmt = Format {
        id: ResourceId::from_counter(1),
        name: None,
        media: MediaType::Video,
        width: 1920,
        height: 1080,
        color_space: ColorSpace::Rec709,
        frame_duration: Some(ntsc()),
    };
    let image_fmt = Format {
        media: MediaType::Image,
        frame_duration: None,
        ..video_fmt.clone()
    };

    check_asset_format_pair(&video, &video_fmt).unwrap();
    let err = check_asset_format_pair(&video, &image_fmt).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MediaConstraint);
    assert!(err.to_string().contains("video asset r2 references image format r1"));
}
