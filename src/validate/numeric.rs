//! Closed-interval checks for every layout and timing scalar.
//!
//! The `validate_*` functions take the raw text a caller received and return the typed value;
//! the interval constants are reused by typed content checks.

use smallvec::SmallVec;

use crate::content::color::Color;
use crate::document::context::Document;
use crate::foundation::core::{Lane, Vec2};
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::time::value::TimeValue;
use crate::timeline::element::{ElementKind, TimelineElement};
use crate::validate::pipeline::DocumentValidator;

/// Numeric interval with an optionally open lower bound; the upper bound is always closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound (inclusive).
    pub hi: f64,
    /// Excludes `lo` itself when set.
    pub lo_open: bool,
}

impl Interval {
    const fn closed(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            lo_open: false,
        }
    }

    const fn left_open(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            lo_open: true,
        }
    }

    /// `true` when `v` is finite and inside the interval.
    pub fn contains(self, v: f64) -> bool {
        if !v.is_finite() {
            return false;
        }
        let above = if self.lo_open { v > self.lo } else { v >= self.lo };
        above && v <= self.hi
    }

    /// Return `v` unchanged or a range error attributed to `field`.
    pub fn check(self, field: &str, v: f64) -> CutlineResult<f64> {
        if !v.is_finite() {
            return Err(CutlineError::range(field, format!("{v} is not finite")));
        }
        if !self.contains(v) {
            return Err(CutlineError::range(field, format!("{v} outside {self}")));
        }
        Ok(v)
    }

    /// Check both components of a pair.
    pub fn check_vec2(self, field: &str, v: Vec2) -> CutlineResult<Vec2> {
        self.check(&format!("{field}.x"), v.x)?;
        self.check(&format!("{field}.y"), v.y)?;
        Ok(v)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.lo_open { '(' } else { '[' };
        write!(f, "{open}{}, {}]", self.lo, self.hi)
    }
}

/// Opacity.
pub const OPACITY: Interval = Interval::closed(0.0, 1.0);
/// One color component.
pub const COLOR_COMPONENT: Interval = Interval::closed(0.0, 1.0);
/// Font size in points.
pub const FONT_SIZE: Interval = Interval::left_open(0.0, 2000.0);
/// Line spacing multiplier.
pub const LINE_SPACING: Interval = Interval::closed(0.1, 20.0);
/// One scale component.
pub const SCALE: Interval = Interval::left_open(0.0, 100.0);
/// Rotation in degrees.
pub const ROTATION: Interval = Interval::closed(-3600.0, 3600.0);
/// One position component.
pub const POSITION: Interval = Interval::closed(-50_000.0, 50_000.0);
/// One anchor component.
pub const ANCHOR: Interval = Interval::closed(-5.0, 5.0);

fn parse_number(field: &str, s: &str) -> CutlineResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| CutlineError::construction(field, format!("invalid number '{s}': {e}")))
}

fn parse_components(field: &str, s: &str) -> CutlineResult<SmallVec<[f64; 4]>> {
    s.split_whitespace()
        .map(|tok| parse_number(field, tok))
        .collect()
}

fn parse_pair(field: &str, s: &str) -> CutlineResult<Vec2> {
    let parts = parse_components(field, s)?;
    match parts.as_slice() {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _ => Err(CutlineError::construction(
            field,
            format!("expected two components, got {}", parts.len()),
        )),
    }
}

/// Opacity in `[0, 1]`.
pub fn validate_opacity(s: &str) -> CutlineResult<f64> {
    OPACITY.check("opacity", parse_number("opacity", s)?)
}

/// Space-separated RGB or RGBA components, each in `[0, 1]`.
pub fn validate_color(s: &str) -> CutlineResult<Color> {
    let parts = parse_components("color", s)?;
    Color::from_components(&parts)
}

/// Font size in `(0, 2000]`.
pub fn validate_font_size(s: &str) -> CutlineResult<f64> {
    FONT_SIZE.check("font_size", parse_number("font_size", s)?)
}

/// Line spacing in `[0.1, 20]`.
pub fn validate_line_spacing(s: &str) -> CutlineResult<f64> {
    LINE_SPACING.check("line_spacing", parse_number("line_spacing", s)?)
}

/// `"x y"` scale with each component in `(0, 100]`.
pub fn validate_scale(s: &str) -> CutlineResult<Vec2> {
    SCALE.check_vec2("scale", parse_pair("scale", s)?)
}

/// Rotation in `[-3600, 3600]` degrees.
pub fn validate_rotation_value(s: &str) -> CutlineResult<f64> {
    ROTATION.check("rotation", parse_number("rotation", s)?)
}

/// `"x y"` position with each component in `[-50000, 50000]`.
pub fn validate_position(s: &str) -> CutlineResult<Vec2> {
    POSITION.check_vec2("position", parse_pair("position", s)?)
}

/// `"x y"` anchor with each component in `[-5, 5]`.
pub fn validate_anchor(s: &str) -> CutlineResult<Vec2> {
    ANCHOR.check_vec2("anchor", parse_pair("anchor", s)?)
}

/// Lane in `[-100, 100]`.
pub fn validate_lane(s: &str) -> CutlineResult<Lane> {
    Lane::parse(s)
}

/// Time offset or duration: a non-negative rational within 24h.
pub fn validate_time_field(field: &str, s: &str) -> CutlineResult<TimeValue> {
    TimeValue::parse(s).map_err(|e| e.at_field(field))
}

/// Every layout and timing scalar of every placed element.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericRangeValidator;

impl DocumentValidator for NumericRangeValidator {
    fn name(&self) -> &'static str {
        "numeric-range"
    }

    fn validate(&self, doc: &Document) -> CutlineResult<()> {
        for seq in doc.sequences() {
            for el in seq.timeline().elements() {
                check_element_ranges(el)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_element_ranges(el: &TimelineElement) -> CutlineResult<()> {
    let id = el.id();
    Lane::new(el.lane().get()).map_err(|e| e.at_field(format!("{id}.lane")))?;
    el.offset()
        .validate()
        .map_err(|e| e.at_field(format!("{id}.offset")))?;
    el.duration()
        .validate()
        .map_err(|e| e.at_field(format!("{id}.duration")))?;
    OPACITY.check(&format!("{id}.opacity"), el.opacity())?;
    el.transform().validate_ranges(&format!("{id}.transform"))?;
    if let ElementKind::Title { text, .. } = el.kind() {
        text.style.validate_ranges(&format!("{id}.title"))?;
    }
    for track in el.animations() {
        track.validate_values(&format!("{id}.{}", track.param.wire()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/validate/numeric.rs"]
mod tests;
