use std::fmt;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::math::wire_f64;

pub use kurbo::Vec2;

/// Signed stacking index of an element relative to its parent.
///
/// Positive lanes stack above the parent, negative lanes below, and lane `0` is the parent's own
/// layer (the spine).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Lane(i32);

impl Lane {
    /// Absolute ceiling accepted anywhere in a document.
    pub const ABSOLUTE_LIMIT: i32 = 100;
    /// Default bound used for structural display.
    pub const DISPLAY_LIMIT: i32 = 10;
    /// The parent's own layer.
    pub const PRIMARY: Self = Self(0);

    /// Create a lane within `[-ABSOLUTE_LIMIT, ABSOLUTE_LIMIT]`.
    pub fn new(v: i32) -> CutlineResult<Self> {
        if v.unsigned_abs() > Self::ABSOLUTE_LIMIT.unsigned_abs() {
            return Err(CutlineError::range(
                "lane",
                format!(
                    "lane {v} outside [-{limit}, {limit}]",
                    limit = Self::ABSOLUTE_LIMIT
                ),
            ));
        }
        Ok(Self(v))
    }

    /// Parse a decimal lane token.
    pub fn parse(s: &str) -> CutlineResult<Self> {
        let v = s
            .trim()
            .parse::<i32>()
            .map_err(|e| CutlineError::construction("lane", format!("invalid lane '{s}': {e}")))?;
        Self::new(v)
    }

    /// Raw signed value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// `true` for lane `0`.
    pub fn is_primary(self) -> bool {
        self.0 == 0
    }

    /// `true` for lanes stacked above the parent.
    pub fn is_above(self) -> bool {
        self.0 > 0
    }

    /// `true` for lanes stacked below the parent.
    pub fn is_below(self) -> bool {
        self.0 < 0
    }

    /// Distance from the parent's layer.
    pub fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }
}

impl TryFrom<i32> for Lane {
    type Error = CutlineError;

    fn try_from(v: i32) -> CutlineResult<Self> {
        Self::new(v)
    }
}

impl From<Lane> for i32 {
    fn from(l: Lane) -> Self {
        l.0
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire form of a 2D value: `"x y"`.
pub fn vec2_wire(v: Vec2) -> String {
    format!("{} {}", wire_f64(v.x), wire_f64(v.y))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
