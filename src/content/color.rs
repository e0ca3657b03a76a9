use smallvec::SmallVec;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::math::wire_f64;
use crate::validate::numeric::COLOR_COMPONENT;

/// Normalized RGB or RGBA color; each component in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    components: SmallVec<[f64; 4]>,
}

impl Color {
    /// Opaque RGB color.
    pub fn rgb(r: f64, g: f64, b: f64) -> CutlineResult<Self> {
        Self::from_components(&[r, g, b])
    }

    /// RGBA color.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> CutlineResult<Self> {
        Self::from_components(&[r, g, b, a])
    }

    /// Build from exactly 3 or 4 components.
    pub fn from_components(components: &[f64]) -> CutlineResult<Self> {
        let c = Self {
            components: SmallVec::from_slice(components),
        };
        c.validate("color")?;
        Ok(c)
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self {
            components: SmallVec::from_slice(&[1.0, 1.0, 1.0, 1.0]),
        }
    }

    /// Raw components.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Alpha component (`1` for RGB colors).
    pub fn alpha(&self) -> f64 {
        self.components.get(3).copied().unwrap_or(1.0)
    }

    /// Re-check component count and ranges.
    pub fn validate(&self, field: &str) -> CutlineResult<()> {
        let n = self.components.len();
        if n != 3 && n != 4 {
            return Err(CutlineError::range(
                field,
                format!("color needs 3 or 4 components, got {n}"),
            ));
        }
        for (i, &v) in self.components.iter().enumerate() {
            COLOR_COMPONENT.check(&format!("{field}[{i}]"), v)?;
        }
        Ok(())
    }

    /// Wire form: space-separated components.
    pub fn wire(&self) -> String {
        self.components
            .iter()
            .map(|&v| wire_f64(v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/color.rs"]
mod tests;
