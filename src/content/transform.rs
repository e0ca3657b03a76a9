use crate::foundation::core::{Vec2, vec2_wire};
use crate::foundation::error::CutlineResult;
use crate::foundation::math::wire_f64;
use crate::validate::numeric::{ANCHOR, POSITION, ROTATION, SCALE};

/// Static 2D transform applied to an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Offset from frame center, in pixels.
    pub position: Vec2,
    /// Per-axis scale factor.
    pub scale: Vec2,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Anchor point in normalized units.
    pub anchor: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, unit scale, no rotation, centered anchor.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: Vec2::new(1.0, 1.0),
        rotation: 0.0,
        anchor: Vec2::ZERO,
    };

    /// Set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the scale.
    pub fn scaled(mut self, x: f64, y: f64) -> Self {
        self.scale = Vec2::new(x, y);
        self
    }

    /// Set the rotation.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the anchor.
    pub fn anchored(mut self, x: f64, y: f64) -> Self {
        self.anchor = Vec2::new(x, y);
        self
    }

    /// `true` when the transform has no effect.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Check every component against its interval.
    pub fn validate_ranges(&self, field: &str) -> CutlineResult<()> {
        POSITION.check_vec2(&format!("{field}.position"), self.position)?;
        SCALE.check_vec2(&format!("{field}.scale"), self.scale)?;
        ROTATION.check(&format!("{field}.rotation"), self.rotation)?;
        ANCHOR.check_vec2(&format!("{field}.anchor"), self.anchor)?;
        Ok(())
    }

    /// Wire tokens as `(position, scale, rotation, anchor)`.
    pub fn wire(&self) -> [String; 4] {
        [
            vec2_wire(self.position),
            vec2_wire(self.scale),
            wire_f64(self.rotation),
            vec2_wire(self.anchor),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/transform.rs"]
mod tests;
