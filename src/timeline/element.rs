use std::collections::BTreeMap;

use crate::content::animation::KeyframeTrack;
use crate::content::text::TitleText;
use crate::content::transform::Transform;
use crate::foundation::core::Lane;
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::ids::ResourceId;
use crate::time::range::TimeRange;
use crate::time::value::{Duration, TimeValue};

/// What an element shows, and which resource it references.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// Clip of a media asset.
    AssetClip {
        /// Referenced asset.
        asset: ResourceId,
    },
    /// Generator instance.
    Video {
        /// Referenced generator effect.
        effect: ResourceId,
    },
    /// Text title.
    Title {
        /// Referenced title effect.
        effect: ResourceId,
        /// Title content.
        text: TitleText,
    },
    /// Empty spine filler.
    Gap,
}

impl ElementKind {
    /// Wire element name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::AssetClip { .. } => "asset-clip",
            Self::Video { .. } => "video",
            Self::Title { .. } => "title",
            Self::Gap => "gap",
        }
    }

    /// Resource this element references, if any.
    pub fn reference(&self) -> Option<ResourceId> {
        match self {
            Self::AssetClip { asset } => Some(*asset),
            Self::Video { effect } | Self::Title { effect, .. } => Some(*effect),
            Self::Gap => None,
        }
    }
}

/// One placed item on a sequence timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineElement {
    pub(crate) id: String,
    pub(crate) range: TimeRange,
    pub(crate) lane: Lane,
    pub(crate) kind: ElementKind,
    pub(crate) name: Option<String>,
    pub(crate) transform: Transform,
    pub(crate) opacity: f64,
    pub(crate) animations: Vec<KeyframeTrack>,
    pub(crate) attributes: BTreeMap<String, String>,
}

impl TimelineElement {
    /// Element `id` occupying `[offset, offset + duration)` on `lane`.
    pub fn new(
        id: impl Into<String>,
        offset: TimeValue,
        duration: Duration,
        lane: Lane,
        kind: ElementKind,
    ) -> CutlineResult<Self> {
        let id = id.into();
        let range = TimeRange::new(offset, duration).map_err(|e| match e {
            CutlineError::Range { message, .. } => CutlineError::timeline(id.clone(), message),
            other => other,
        })?;
        Ok(Self {
            id,
            range,
            lane,
            kind,
            name: None,
            transform: Transform::IDENTITY,
            opacity: 1.0,
            animations: Vec::new(),
            attributes: BTreeMap::new(),
        })
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the static transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the static opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Add a keyframe track.
    pub fn with_animation(mut self, track: KeyframeTrack) -> Self {
        self.animations.push(track);
        self
    }

    /// Set a generic attribute. Values are untrusted text.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Element id, unique within its sequence.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Occupied range.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Start offset.
    pub fn offset(&self) -> TimeValue {
        self.range.start()
    }

    /// Length.
    pub fn duration(&self) -> Duration {
        self.range.duration()
    }

    /// Stacking lane.
    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Content kind.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Static transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Static opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Keyframe tracks.
    pub fn animations(&self) -> &[KeyframeTrack] {
        &self.animations
    }

    /// Generic attributes in key order.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
