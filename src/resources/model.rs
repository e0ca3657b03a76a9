use std::fmt;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::ids::ResourceId;
use crate::time::rational::Rational;
use crate::time::value::{Duration, TimeValue};

/// Kind of media an asset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Still image.
    Image,
    /// Moving picture, optionally with audio.
    Video,
    /// Audio only.
    Audio,
}

impl MediaType {
    /// Lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color spaces the target schema recognizes for formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Rec. 709 (SDR HD).
    #[default]
    Rec709,
    /// Rec. 2020 (SDR wide gamut).
    Rec2020,
    /// Rec. 2020 PQ (HDR10).
    Rec2020Pq,
    /// Rec. 2020 HLG.
    Rec2020Hlg,
}

impl ColorSpace {
    /// Wire string used by the `colorSpace` attribute.
    pub fn wire(self) -> &'static str {
        match self {
            Self::Rec709 => "1-1-1 (Rec. 709)",
            Self::Rec2020 => "9-1-9 (Rec. 2020)",
            Self::Rec2020Pq => "9-16-9 (Rec. 2020 PQ)",
            Self::Rec2020Hlg => "9-18-9 (Rec. 2020 HLG)",
        }
    }

    /// Parse a wire string.
    pub fn from_wire(s: &str) -> CutlineResult<Self> {
        [Self::Rec709, Self::Rec2020, Self::Rec2020Pq, Self::Rec2020Hlg]
            .into_iter()
            .find(|c| c.wire() == s.trim())
            .ok_or_else(|| {
                CutlineError::construction(
                    "format.color_space",
                    format!("unknown color space '{s}'"),
                )
            })
    }
}

/// Audio sample rates the target schema accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioRate {
    /// 32 kHz.
    Hz32000,
    /// 44.1 kHz.
    Hz44100,
    /// 48 kHz.
    Hz48000,
    /// 88.2 kHz.
    Hz88200,
    /// 96 kHz.
    Hz96000,
    /// 176.4 kHz.
    Hz176400,
    /// 192 kHz.
    Hz192000,
}

impl AudioRate {
    const ALL: [Self; 7] = [
        Self::Hz32000,
        Self::Hz44100,
        Self::Hz48000,
        Self::Hz88200,
        Self::Hz96000,
        Self::Hz176400,
        Self::Hz192000,
    ];

    /// Map a sample rate in Hz onto the closed set.
    pub fn from_hz(hz: u32) -> CutlineResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.hz() == hz)
            .ok_or_else(|| {
                CutlineError::range("asset.audio_rate", format!("unsupported sample rate {hz} Hz"))
            })
    }

    /// Sample rate in Hz.
    pub fn hz(self) -> u32 {
        match self {
            Self::Hz32000 => 32_000,
            Self::Hz44100 => 44_100,
            Self::Hz48000 => 48_000,
            Self::Hz88200 => 88_200,
            Self::Hz96000 => 96_000,
            Self::Hz176400 => 176_400,
            Self::Hz192000 => 192_000,
        }
    }

    /// Wire token (`"48k"`, `"44.1k"`, ...).
    pub fn wire(self) -> &'static str {
        match self {
            Self::Hz32000 => "32k",
            Self::Hz44100 => "44.1k",
            Self::Hz48000 => "48k",
            Self::Hz88200 => "88.2k",
            Self::Hz96000 => "96k",
            Self::Hz176400 => "176.4k",
            Self::Hz192000 => "192k",
        }
    }
}

/// Complete audio property set of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioProps {
    /// Number of audio sources.
    pub sources: u32,
    /// Channel count.
    pub channels: u32,
    /// Sample rate.
    pub rate: AudioRate,
}

/// Caller input for [`crate::Transaction::create_asset`].
///
/// Audio fields are kept individually so an inconsistent set can be reported instead of being
/// unrepresentable at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSpec {
    /// Display name.
    pub name: String,
    /// Source media path; the deduplication key.
    pub path: String,
    /// Declared media type.
    pub media: MediaType,
    /// Media start time.
    pub start: TimeValue,
    /// Media duration (`0s` for images).
    pub duration: Duration,
    /// Declares a video track.
    pub has_video: bool,
    /// Declares an audio track.
    pub has_audio: bool,
    /// Referenced format resource.
    pub format: Option<ResourceId>,
    /// Audio source count.
    pub audio_sources: Option<u32>,
    /// Audio channel count.
    pub audio_channels: Option<u32>,
    /// Audio sample rate in Hz.
    pub audio_rate: Option<u32>,
}

impl AssetSpec {
    fn base(name: impl Into<String>, path: impl Into<String>, media: MediaType) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            media,
            start: TimeValue::ZERO,
            duration: TimeValue::ZERO,
            has_video: false,
            has_audio: false,
            format: None,
            audio_sources: None,
            audio_channels: None,
            audio_rate: None,
        }
    }

    /// Still image asset.
    pub fn image(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            has_video: true,
            ..Self::base(name, path, MediaType::Image)
        }
    }

    /// Video asset without audio.
    pub fn video(name: impl Into<String>, path: impl Into<String>, duration: Duration) -> Self {
        Self {
            has_video: true,
            duration,
            ..Self::base(name, path, MediaType::Video)
        }
    }

    /// Audio-only asset.
    pub fn audio(
        name: impl Into<String>,
        path: impl Into<String>,
        duration: Duration,
        channels: u32,
        rate_hz: u32,
    ) -> Self {
        Self {
            has_audio: true,
            duration,
            audio_sources: Some(1),
            audio_channels: Some(channels),
            audio_rate: Some(rate_hz),
            ..Self::base(name, path, MediaType::Audio)
        }
    }

    /// Declare a complete audio property set.
    pub fn with_audio(mut self, sources: u32, channels: u32, rate_hz: u32) -> Self {
        self.has_audio = true;
        self.audio_sources = Some(sources);
        self.audio_channels = Some(channels);
        self.audio_rate = Some(rate_hz);
        self
    }

    /// Reference a format resource.
    pub fn with_format(mut self, format: ResourceId) -> Self {
        self.format = Some(format);
        self
    }
}

/// Committed (or staged) media asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub(crate) id: ResourceId,
    pub(crate) name: String,
    pub(crate) src: String,
    pub(crate) media: MediaType,
    pub(crate) start: TimeValue,
    pub(crate) duration: Duration,
    pub(crate) has_video: bool,
    pub(crate) has_audio: bool,
    pub(crate) format: Option<ResourceId>,
    pub(crate) audio: Option<AudioProps>,
}

impl Asset {
    /// Resource id.
    pub fn id(&self) -> ResourceId {
        self.id
    }
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Normalized source path.
    pub fn src(&self) -> &str {
        &self.src
    }
    /// `file://` URL used by the `media-rep` element.
    pub fn src_url(&self) -> String {
        format!("file://{}", self.src)
    }
    /// Declared media type.
    pub fn media(&self) -> MediaType {
        self.media
    }
    /// Media start.
    pub fn start(&self) -> TimeValue {
        self.start
    }
    /// Media duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
    /// Declares a video track.
    pub fn has_video(&self) -> bool {
        self.has_video
    }
    /// Declares an audio track.
    pub fn has_audio(&self) -> bool {
        self.has_audio
    }
    /// Referenced format.
    pub fn format(&self) -> Option<ResourceId> {
        self.format
    }
    /// Audio properties, when declared.
    pub fn audio(&self) -> Option<AudioProps> {
        self.audio
    }
}

/// Caller input for [`crate::Transaction::create_format`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    /// Optional preset name (e.g. `FFVideoFormat1080p2398`).
    pub name: Option<String>,
    /// Media this format describes.
    pub media: MediaType,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color space.
    pub color_space: ColorSpace,
    /// Frame duration in the format's native timebase. Video only.
    pub frame_duration: Option<Rational>,
}

impl FormatSpec {
    /// Video format with a native frame duration.
    pub fn video(width: u32, height: u32, frame_duration: Rational) -> Self {
        Self {
            name: None,
            media: MediaType::Video,
            width,
            height,
            color_space: ColorSpace::default(),
            frame_duration: Some(frame_duration),
        }
    }

    /// Still image format.
    pub fn image(width: u32, height: u32) -> Self {
        Self {
            name: None,
            media: MediaType::Image,
            width,
            height,
            color_space: ColorSpace::default(),
            frame_duration: None,
        }
    }

    /// Set the preset name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color space.
    pub fn with_color_space(mut self, cs: ColorSpace) -> Self {
        self.color_space = cs;
        self
    }
}

/// Committed (or staged) format.
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    pub(crate) id: ResourceId,
    pub(crate) name: Option<String>,
    pub(crate) media: MediaType,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) color_space: ColorSpace,
    pub(crate) frame_duration: Option<Rational>,
}

impl Format {
    /// Resource id.
    pub fn id(&self) -> ResourceId {
        self.id
    }
    /// Preset name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// Described media.
    pub fn media(&self) -> MediaType {
        self.media
    }
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
    /// Color space.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }
    /// Native frame duration (video formats only).
    pub fn frame_duration(&self) -> Option<Rational> {
        self.frame_duration
    }
}

/// Caller input for [`crate::Transaction::create_effect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSpec {
    /// Display name.
    pub name: String,
    /// Identifier; must be in the verified catalog.
    pub uid: String,
}

impl EffectSpec {
    /// Build a spec.
    pub fn new(name: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
        }
    }
}

/// Committed (or staged) effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub(crate) id: ResourceId,
    pub(crate) name: String,
    pub(crate) uid: String,
}

impl Effect {
    /// Resource id.
    pub fn id(&self) -> ResourceId {
        self.id
    }
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Verified identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Discriminant of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Media asset.
    Asset,
    /// Format.
    Format,
    /// Effect.
    Effect,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asset => "asset",
            Self::Format => "format",
            Self::Effect => "effect",
        })
    }
}

/// An ID-addressed definition stored once in the document's resource pool.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    /// Media asset.
    Asset(Asset),
    /// Format.
    Format(Format),
    /// Effect.
    Effect(Effect),
}

impl Resource {
    /// Resource id.
    pub fn id(&self) -> ResourceId {
        match self {
            Self::Asset(a) => a.id,
            Self::Format(f) => f.id,
            Self::Effect(e) => e.id,
        }
    }

    /// Discriminant.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Asset(_) => ResourceKind::Asset,
            Self::Format(_) => ResourceKind::Format,
            Self::Effect(_) => ResourceKind::Effect,
        }
    }

    /// Asset view.
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Self::Asset(a) => Some(a),
            _ => None,
        }
    }

    /// Format view.
    pub fn as_format(&self) -> Option<&Format> {
        match self {
            Self::Format(f) => Some(f),
            _ => None,
        }
    }

    /// Effect view.
    pub fn as_effect(&self) -> Option<&Effect> {
        match self {
            Self::Effect(e) => Some(e),
            _ => None,
        }
    }
}
