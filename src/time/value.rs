use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::math::round_div_u128;
use crate::time::rational::{MAX_SECONDS, Rational};

/// Canonical project timebase (ticks per second).
pub const TIMEBASE: u64 = 24_000;
/// Ticks per frame at the canonical timebase (`1001/24000s` ≈ 23.976 fps).
pub const FRAME_TICKS: u64 = 1_001;
/// Largest whole frame count that stays within 24 hours.
pub const MAX_FRAMES: u64 = MAX_SECONDS * TIMEBASE / FRAME_TICKS;

/// Frame-snapped time offset or duration.
///
/// Always an integer number of frames on the canonical grid, so edit points can never drift off
/// a frame boundary. Serialized as `"<frames*1001>/24000s"` or `"0s"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    frames: u64,
}

/// Durations share the offset representation.
pub type Duration = TimeValue;

impl TimeValue {
    /// Zero seconds.
    pub const ZERO: Self = Self { frames: 0 };

    /// Create from a whole frame count.
    pub fn from_frames(frames: u64) -> CutlineResult<Self> {
        if frames > MAX_FRAMES {
            return Err(CutlineError::range(
                "time",
                format!("{frames} frames exceeds 24 hours"),
            ));
        }
        Ok(Self { frames })
    }

    /// Snap floating-point seconds to the nearest frame.
    pub fn from_seconds(secs: f64) -> CutlineResult<Self> {
        if !secs.is_finite() {
            return Err(CutlineError::range("time", "seconds must be finite"));
        }
        if secs < 0.0 {
            return Err(CutlineError::range(
                "time",
                format!("seconds must be >= 0, got {secs}"),
            ));
        }
        if secs > MAX_SECONDS as f64 {
            return Err(CutlineError::range(
                "time",
                format!("{secs}s exceeds 24 hours"),
            ));
        }
        let frames = (secs * TIMEBASE as f64 / FRAME_TICKS as f64).round() as u64;
        Self::from_frames(frames.min(MAX_FRAMES))
    }

    /// Convert an exact rational in any timebase, rounding to the nearest frame.
    ///
    /// Rounding (not truncation) keeps values from 60000- or 120000-based sources within half a
    /// frame of where they were authored.
    pub fn from_rational(r: Rational) -> CutlineResult<Self> {
        r.validate()?;
        let n = u128::from(r.num()) * u128::from(TIMEBASE);
        let d = u128::from(r.den()) * u128::from(FRAME_TICKS);
        let frames = u64::try_from(round_div_u128(n, d))
            .map_err(|_| CutlineError::range("time", format!("{r} exceeds 24 hours")))?;
        Self::from_frames(frames)
    }

    /// Parse wire text and snap it to the canonical frame grid.
    pub fn parse(s: &str) -> CutlineResult<Self> {
        Self::from_rational(Rational::parse(s)?)
    }

    /// Whole frame count.
    pub fn frames(self) -> u64 {
        self.frames
    }

    /// Numerator over [`TIMEBASE`]; always a multiple of [`FRAME_TICKS`].
    pub fn ticks(self) -> u64 {
        self.frames * FRAME_TICKS
    }

    /// `true` for zero seconds.
    pub fn is_zero(self) -> bool {
        self.frames == 0
    }

    /// Exact value as a rational over the canonical timebase.
    pub fn to_rational(self) -> Rational {
        if self.frames == 0 {
            return Rational::ZERO;
        }
        Rational::from_parts_unchecked(self.ticks(), TIMEBASE)
    }

    /// Seconds as `f64`. For comparisons only; never store the result.
    pub fn to_seconds(self) -> f64 {
        self.ticks() as f64 / TIMEBASE as f64
    }

    /// Re-check the 24 hour ceiling.
    pub fn validate(self) -> CutlineResult<()> {
        Self::from_frames(self.frames).map(|_| ())
    }

    /// Sum, failing past 24 hours.
    pub fn checked_add(self, other: Self) -> CutlineResult<Self> {
        Self::from_frames(self.frames.saturating_add(other.frames))
    }

    /// Difference clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            frames: self.frames.saturating_sub(other.frames),
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames == 0 {
            return f.write_str("0s");
        }
        write!(f, "{}/{}s", self.ticks(), TIMEBASE)
    }
}

impl FromStr for TimeValue {
    type Err = CutlineError;

    fn from_str(s: &str) -> CutlineResult<Self> {
        Self::parse(s)
    }
}

impl serde::Serialize for TimeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TimeValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/value.rs"]
mod tests;
