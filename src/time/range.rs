use std::fmt;

use crate::foundation::error::CutlineResult;
use crate::time::value::{Duration, TimeValue};

/// Closed-open time interval `[start, end)` on the canonical frame grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: TimeValue,
    end: TimeValue,
}

impl TimeRange {
    /// Range covering `duration` from `offset`. Fails if the end passes 24 hours.
    pub fn new(offset: TimeValue, duration: Duration) -> CutlineResult<Self> {
        Ok(Self {
            start: offset,
            end: offset.checked_add(duration)?,
        })
    }

    /// `[0, total)`.
    pub fn from_zero(total: Duration) -> Self {
        Self {
            start: TimeValue::ZERO,
            end: total,
        }
    }

    /// Inclusive start.
    pub fn start(self) -> TimeValue {
        self.start
    }

    /// Exclusive end.
    pub fn end(self) -> TimeValue {
        self.end
    }

    /// Length of the range.
    pub fn duration(self) -> Duration {
        self.end.saturating_sub(self.start)
    }

    /// `true` when `t` lies in `[start, end)`.
    pub fn contains(self, t: TimeValue) -> bool {
        self.start <= t && t < self.end
    }

    /// `true` when `other` lies entirely inside this range. An `other` ending exactly at `end`
    /// is contained.
    pub fn contains_range(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Two ranges overlap unless one ends at or before the other starts.
    pub fn overlaps(self, other: Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Like [`TimeRange::overlaps`], but an empty range counts as the instant at its start, so
    /// `[t, t)` intersects any range containing `t`.
    pub fn intersects(self, other: Self) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/range.rs"]
mod tests;
