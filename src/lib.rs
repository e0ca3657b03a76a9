//! Cutline builds validated documents for a non-linear video editor's XML interchange format.
//!
//! The core is a typed document graph that can only be handed to a serializer once every value
//! in it satisfies the format's rules:
//!
//! - Exact time on a 24000 timebase with 1001-tick frames ([`TimeValue`], [`Rational`])
//! - A document-scoped resource pool mutated through atomic [`Transaction`]s
//! - Per-sequence placement rules ([`TimelineValidator`])
//! - Independent structural, media, security and numeric validators ([`ValidationPipeline`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod content;
mod document;
mod foundation;
mod resources;
mod time;
mod timeline;
mod validate;

pub use crate::content::animation::{AnimatedParam, Curve, Keyframe, KeyframeTrack, ParamValue};
pub use crate::content::color::Color;
pub use crate::content::text::{TextAlignment, TextStyle, TitleText};
pub use crate::content::transform::Transform;
pub use crate::document::config::DocumentConfig;
pub use crate::document::context::{Document, Sequence, ValidatedDocument};
pub use crate::document::fingerprint::DocumentFingerprint;
pub use crate::foundation::core::{Lane, Vec2, vec2_wire};
pub use crate::foundation::error::{CutlineError, CutlineResult, ErrorKind};
pub use crate::foundation::ids::{ResourceId, SequenceId};
pub use crate::resources::ResourceLookup;
pub use crate::resources::catalog::{
    EffectCategory, EffectDescriptor, lookup_effect, verified_effects,
};
pub use crate::resources::constraints::{MAX_AUDIO_CHANNELS, MAX_FORMAT_EDGE};
pub use crate::resources::model::{
    Asset, AssetSpec, AudioProps, AudioRate, ColorSpace, Effect, EffectSpec, Format, FormatSpec,
    MediaType, Resource, ResourceKind,
};
pub use crate::resources::registry::{AssetSlot, ResourceRegistry, normalize_source_path};
pub use crate::resources::transaction::{CommitReceipt, Transaction};
pub use crate::time::range::TimeRange;
pub use crate::time::rational::{MAX_SECONDS, Rational};
pub use crate::time::value::{Duration, FRAME_TICKS, MAX_FRAMES, TIMEBASE, TimeValue};
pub use crate::timeline::element::{ElementKind, TimelineElement};
pub use crate::timeline::validator::{TimelineConfig, TimelineValidator};
pub use crate::validate::external::{SchemaCheck, SchemaKind, SchemaTool, SchemaToolOpts};
pub use crate::validate::media::MediaConstraintValidator;
pub use crate::validate::numeric::{
    Interval, NumericRangeValidator, validate_anchor, validate_color, validate_font_size,
    validate_line_spacing, validate_lane, validate_opacity, validate_position,
    validate_rotation_value, validate_scale, validate_time_field,
};
pub use crate::validate::pipeline::{DocumentValidator, ValidationPipeline};
pub use crate::validate::security::{
    ContentSecurityValidator, MAX_FONT_NAME_LEN, MAX_PATH_LEN, MAX_TEXT_LEN, validate_font_name,
    validate_media_path, validate_text_content, validate_text_field,
};
pub use crate::validate::structural::StructuralValidator;
