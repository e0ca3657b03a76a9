//! Media-type rules shared by construction-time checks and the media constraint validator.

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::resources::model::{Asset, AssetSpec, Format, FormatSpec, MediaType};
use crate::time::rational::Rational;
use crate::time::value::{Duration, TimeValue};

/// Largest accepted format edge in pixels.
pub const MAX_FORMAT_EDGE: u32 = 16_384;
/// Largest accepted audio channel count.
pub const MAX_AUDIO_CHANNELS: u32 = 24;

/// Property set the media rules look at, extracted from either a spec or a built asset.
struct MediaProps {
    media: MediaType,
    duration: Duration,
    has_video: bool,
    has_audio: bool,
    audio_sources: Option<u32>,
    audio_channels: Option<u32>,
    audio_rate: Option<u32>,
}

impl MediaProps {
    fn from_spec(spec: &AssetSpec) -> Self {
        Self {
            media: spec.media,
            duration: spec.duration,
            has_video: spec.has_video,
            has_audio: spec.has_audio,
            audio_sources: spec.audio_sources,
            audio_channels: spec.audio_channels,
            audio_rate: spec.audio_rate,
        }
    }

    fn from_asset(asset: &Asset) -> Self {
        Self {
            media: asset.media,
            duration: asset.duration,
            has_video: asset.has_video,
            has_audio: asset.has_audio,
            audio_sources: asset.audio.map(|a| a.sources),
            audio_channels: asset.audio.map(|a| a.channels),
            audio_rate: asset.audio.map(|a| a.rate.hz()),
        }
    }

    fn any_audio_field(&self) -> bool {
        self.audio_sources.is_some() || self.audio_channels.is_some() || self.audio_rate.is_some()
    }

    fn all_audio_fields(&self) -> bool {
        self.audio_sources.is_some() && self.audio_channels.is_some() && self.audio_rate.is_some()
    }
}

/// Check an asset spec before it is staged.
pub(crate) fn check_asset_spec(spec: &AssetSpec) -> CutlineResult<()> {
    check_props(&MediaProps::from_spec(spec))
}

/// Re-check a built asset.
pub(crate) fn check_asset(asset: &Asset) -> CutlineResult<()> {
    check_props(&MediaProps::from_asset(asset))
}

fn check_props(p: &MediaProps) -> CutlineResult<()> {
    match p.media {
        MediaType::Image => {
            if p.duration != TimeValue::ZERO {
                return Err(CutlineError::media(
                    "asset.duration",
                    format!("image assets must have duration 0s, got {}", p.duration),
                ));
            }
            if !p.has_video {
                return Err(CutlineError::media(
                    "asset.has_video",
                    "image assets must declare has_video",
                ));
            }
            if p.has_audio || p.any_audio_field() {
                return Err(CutlineError::media(
                    "asset.audio",
                    "image assets must not declare audio properties",
                ));
            }
        }
        MediaType::Video => {
            if !p.has_video {
                return Err(CutlineError::media(
                    "asset.has_video",
                    "video assets must declare has_video",
                ));
            }
            if p.duration.is_zero() {
                return Err(CutlineError::media(
                    "asset.duration",
                    "video assets must have a non-zero duration",
                ));
            }
            if p.any_audio_field() && !p.all_audio_fields() {
                return Err(CutlineError::media(
                    "asset.audio",
                    "audio sources, channels and rate must be declared together",
                ));
            }
            if p.has_audio != p.all_audio_fields() {
                return Err(CutlineError::media(
                    "asset.has_audio",
                    "has_audio must match the presence of audio properties",
                ));
            }
            if p.has_audio {
                check_audio_values(p)?;
            }
        }
        MediaType::Audio => {
            if !p.has_audio {
                return Err(CutlineError::media(
                    "asset.has_audio",
                    "audio assets must declare has_audio",
                ));
            }
            if p.has_video {
                return Err(CutlineError::media(
                    "asset.has_video",
                    "audio assets must not declare video properties",
                ));
            }
            if p.audio_channels.is_none() {
                return Err(CutlineError::media(
                    "asset.audio_channels",
                    "audio assets require a channel count",
                ));
            }
            if p.audio_rate.is_none() {
                return Err(CutlineError::media(
                    "asset.audio_rate",
                    "audio assets require a sample rate",
                ));
            }
            if p.duration.is_zero() {
                return Err(CutlineError::media(
                    "asset.duration",
                    "audio assets must have a non-zero duration",
                ));
            }
            check_audio_values(p)?;
        }
    }
    Ok(())
}

fn check_audio_values(p: &MediaProps) -> CutlineResult<()> {
    if let Some(sources) = p.audio_sources
        && sources == 0
    {
        return Err(CutlineError::range(
            "asset.audio_sources",
            "audio source count must be >= 1",
        ));
    }
    if let Some(ch) = p.audio_channels
        && !(1..=MAX_AUDIO_CHANNELS).contains(&ch)
    {
        return Err(CutlineError::range(
            "asset.audio_channels",
            format!("channel count {ch} outside [1, {MAX_AUDIO_CHANNELS}]"),
        ));
    }
    if let Some(hz) = p.audio_rate {
        crate::resources::model::AudioRate::from_hz(hz)?;
    }
    Ok(())
}

/// Check a format spec before it is staged.
pub(crate) fn check_format_spec(spec: &FormatSpec) -> CutlineResult<()> {
    check_format_props(spec.media, spec.width, spec.height, spec.frame_duration)
}

/// Re-check a built format.
pub(crate) fn check_format(format: &Format) -> CutlineResult<()> {
    check_format_props(
        format.media,
        format.width,
        format.height,
        format.frame_duration,
    )
}

fn check_format_props(
    media: MediaType,
    width: u32,
    height: u32,
    frame_duration: Option<Rational>,
) -> CutlineResult<()> {
    for (field, v) in [("format.width", width), ("format.height", height)] {
        if !(1..=MAX_FORMAT_EDGE).contains(&v) {
            return Err(CutlineError::range(
                field,
                format!("{v} outside [1, {MAX_FORMAT_EDGE}]"),
            ));
        }
    }
    match media {
        MediaType::Image => {
            if frame_duration.is_some() {
                return Err(CutlineError::media(
                    "format.frame_duration",
                    "image formats must not declare a frame duration",
                ));
            }
        }
        MediaType::Video => {
            let fd = frame_duration.ok_or_else(|| {
                CutlineError::media(
                    "format.frame_duration",
                    "video formats require a frame duration",
                )
            })?;
            fd.validate()
                .map_err(|e| e.at_field("format.frame_duration"))?;
            if fd.is_zero() {
                return Err(CutlineError::media(
                    "format.frame_duration",
                    "frame duration must be > 0s",
                ));
            }
            if fd.to_seconds() > 1.0 {
                return Err(CutlineError::range(
                    "format.frame_duration",
                    format!("frame duration {fd} is longer than one second"),
                ));
            }
        }
        MediaType::Audio => {
            return Err(CutlineError::media(
                "format.media",
                "formats describe image or video media only",
            ));
        }
    }
    Ok(())
}

/// Cross-check an asset against the format it references.
pub(crate) fn check_asset_format_pair(asset: &Asset, format: &Format) -> CutlineResult<()> {
    match (asset.media, format.media) {
        (MediaType::Image, MediaType::Image) | (MediaType::Video, MediaType::Video) => {}
        (MediaType::Audio, _) => {
            return Err(CutlineError::media(
                "asset.format",
                format!(
                    "audio asset {} must not reference format {}",
                    asset.id, format.id
                ),
            ));
        }
        (a, f) => {
            return Err(CutlineError::media(
                "asset.format",
                format!(
                    "{a} asset {} references {f} format {}",
                    asset.id, format.id
                ),
            ));
        }
    }
    check_format(format)
}

#[cfg(test)]
#[path = "../../tests/unit/resources/constraints.rs"]
mod tests;
