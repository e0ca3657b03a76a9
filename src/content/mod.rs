//! Typed element content: colors, title text, transforms and keyframe animation.
//!
//! Values are held typed; the `wire` helpers produce the serialized token only at the boundary.

pub(crate) mod animation;
pub(crate) mod color;
pub(crate) mod text;
pub(crate) mod transform;
