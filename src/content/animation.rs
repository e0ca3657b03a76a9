//! Keyframe animation of element parameters.
//!
//! Keyframe times are relative to the element's own start and must be strictly ascending.

use crate::foundation::core::{Vec2, vec2_wire};
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::math::wire_f64;
use crate::time::value::{Duration, TimeValue};
use crate::validate::numeric::{ANCHOR, Interval, OPACITY, POSITION, ROTATION, SCALE};

/// Interpolation toward the next keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Straight-line interpolation.
    #[default]
    Linear,
    /// Eased interpolation.
    Smooth,
    /// Step: hold until the next keyframe.
    Hold,
}

impl Curve {
    /// Wire token.
    pub fn wire(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Smooth => "smooth",
            Self::Hold => "hold",
        }
    }
}

/// Parameter a track animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedParam {
    /// Transform position (pair).
    Position,
    /// Transform scale (pair).
    Scale,
    /// Transform rotation (scalar, degrees).
    Rotation,
    /// Transform anchor (pair).
    Anchor,
    /// Opacity (scalar).
    Opacity,
}

impl AnimatedParam {
    /// Wire parameter name.
    pub fn wire(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Scale => "scale",
            Self::Rotation => "rotation",
            Self::Anchor => "anchor",
            Self::Opacity => "amount",
        }
    }

    /// `true` for two-component parameters.
    pub fn is_pair(self) -> bool {
        matches!(self, Self::Position | Self::Scale | Self::Anchor)
    }

    fn interval(self) -> Interval {
        match self {
            Self::Position => POSITION,
            Self::Scale => SCALE,
            Self::Rotation => ROTATION,
            Self::Anchor => ANCHOR,
            Self::Opacity => OPACITY,
        }
    }
}

/// Keyframe value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// Single number.
    Scalar(f64),
    /// Two-component value.
    Pair(Vec2),
}

impl ParamValue {
    /// Wire token.
    pub fn wire(self) -> String {
        match self {
            Self::Scalar(v) => wire_f64(v),
            Self::Pair(v) => vec2_wire(v),
        }
    }
}

/// One keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Time relative to the element start.
    pub time: TimeValue,
    /// Value at `time`.
    pub value: ParamValue,
    /// Interpolation toward the next keyframe.
    pub curve: Curve,
}

/// Keyframes for one parameter of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    /// Animated parameter.
    pub param: AnimatedParam,
    /// Keyframes in ascending time order.
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// Empty track for `param`.
    pub fn new(param: AnimatedParam) -> Self {
        Self {
            param,
            keyframes: Vec::new(),
        }
    }

    /// Append a keyframe.
    pub fn key(mut self, time: TimeValue, value: ParamValue, curve: Curve) -> Self {
        self.keyframes.push(Keyframe { time, value, curve });
        self
    }

    /// Structural checks: non-empty, value shape matches the parameter, times strictly
    /// ascending and within `duration`.
    pub fn validate_shape(&self, field: &str, duration: Duration) -> CutlineResult<()> {
        if self.keyframes.is_empty() {
            return Err(CutlineError::construction(
                field,
                format!("{} track has no keyframes", self.param.wire()),
            ));
        }
        let mut prev: Option<TimeValue> = None;
        for (i, kf) in self.keyframes.iter().enumerate() {
            let at = format!("{field}[{i}]");
            let shape_ok = matches!(
                (self.param.is_pair(), kf.value),
                (true, ParamValue::Pair(_)) | (false, ParamValue::Scalar(_))
            );
            if !shape_ok {
                return Err(CutlineError::construction(
                    at,
                    format!("value shape does not match parameter {}", self.param.wire()),
                ));
            }
            if let Some(p) = prev
                && kf.time <= p
            {
                return Err(CutlineError::construction(
                    at,
                    format!("keyframe at {} is not after {}", kf.time, p),
                ));
            }
            if kf.time > duration {
                return Err(CutlineError::range(
                    at,
                    format!("keyframe at {} is past element duration {duration}", kf.time),
                ));
            }
            prev = Some(kf.time);
        }
        Ok(())
    }

    /// Range-check every keyframe value for the parameter.
    pub fn validate_values(&self, field: &str) -> CutlineResult<()> {
        let iv = self.param.interval();
        for (i, kf) in self.keyframes.iter().enumerate() {
            let at = format!("{field}[{i}]");
            match kf.value {
                ParamValue::Scalar(v) => {
                    iv.check(&at, v)?;
                }
                ParamValue::Pair(v) => {
                    iv.check_vec2(&at, v)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/animation.rs"]
mod tests;
