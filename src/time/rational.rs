use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::math::gcd_u64;

/// Longest time value a document may carry, in seconds.
pub const MAX_SECONDS: u64 = 24 * 60 * 60;

/// Exact, non-negative rational number of seconds in any timebase.
///
/// This is the raw wire value (`"N/Ds"`, `"Ns"` or `"0s"`). Values that must sit on the project
/// frame grid are carried as [`crate::TimeValue`] instead; a `Rational` is kept as-is only where
/// the wire demands the native timebase, e.g. a 29.97 format's `1001/30000s` frame duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: u64,
    den: u64,
}

impl Rational {
    /// Zero seconds.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// Create a validated rational `num/den` seconds.
    ///
    /// Rejects non-positive denominators, negative values and values above 24 hours.
    pub fn new(num: i64, den: i64) -> CutlineResult<Self> {
        if den <= 0 {
            return Err(CutlineError::construction(
                "time",
                format!("denominator must be > 0, got {den}"),
            ));
        }
        if num < 0 {
            return Err(CutlineError::range(
                "time",
                format!("time must be >= 0, got {num}/{den}s"),
            ));
        }
        let r = Self {
            num: num.unsigned_abs(),
            den: den.unsigned_abs(),
        };
        r.validate()?;
        Ok(r)
    }

    /// Parse wire text: `"0s"`, `"<N>s"` or `"<N>/<D>s"`.
    pub fn parse(s: &str) -> CutlineResult<Self> {
        let t = s.trim();
        let body = t.strip_suffix('s').ok_or_else(|| {
            CutlineError::construction("time", format!("'{s}' must end with 's'"))
        })?;
        if body.is_empty() {
            return Err(CutlineError::construction(
                "time",
                format!("'{s}' has no numeric part"),
            ));
        }

        let (num_s, den_s) = match body.split_once('/') {
            Some((n, d)) => (n, d),
            None => (body, "1"),
        };
        let num = parse_component(s, num_s)?;
        let den = parse_component(s, den_s)?;
        Self::new(num, den)
    }

    /// Re-check the invariants (`den > 0`, `0 <= value <= 24h`).
    pub fn validate(&self) -> CutlineResult<()> {
        if self.den == 0 {
            return Err(CutlineError::construction("time", "denominator must be > 0"));
        }
        if u128::from(self.num) > u128::from(MAX_SECONDS) * u128::from(self.den) {
            return Err(CutlineError::range("time", format!("{self} exceeds 24 hours")));
        }
        Ok(())
    }

    /// Numerator.
    pub fn num(self) -> u64 {
        self.num
    }

    /// Denominator (always > 0).
    pub fn den(self) -> u64 {
        self.den
    }

    /// `true` when the value is zero seconds.
    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Exact division. For comparisons only; never store the result.
    pub fn to_seconds(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Reduce to lowest terms.
    pub fn reduced(self) -> Self {
        if self.num == 0 {
            return Self::ZERO;
        }
        let g = gcd_u64(self.num, self.den);
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }

    /// Compare by value, so `1/2s` and `12000/24000s` are equal.
    pub fn cmp_value(self, other: Self) -> std::cmp::Ordering {
        let a = u128::from(self.num) * u128::from(other.den);
        let b = u128::from(other.num) * u128::from(self.den);
        a.cmp(&b)
    }

    pub(crate) fn from_parts_unchecked(num: u64, den: u64) -> Self {
        Self { num, den }
    }
}

fn parse_component(full: &str, part: &str) -> CutlineResult<i64> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return Err(CutlineError::construction(
            "time",
            format!("'{full}' is not a rational time value"),
        ));
    }
    part.parse::<i64>().map_err(|e| {
        CutlineError::construction("time", format!("'{full}' is not a rational time value: {e}"))
    })
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num == 0 {
            return f.write_str("0s");
        }
        if self.den == 1 {
            return write!(f, "{}s", self.num);
        }
        write!(f, "{}/{}s", self.num, self.den)
    }
}

impl FromStr for Rational {
    type Err = CutlineError;

    fn from_str(s: &str) -> CutlineResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/rational.rs"]
mod tests;
