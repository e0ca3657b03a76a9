pub(crate) fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `n / d` rounded to the nearest integer, halves rounding up. `d` must be non-zero.
pub(crate) fn round_div_u128(n: u128, d: u128) -> u128 {
    (2 * n + d) / (2 * d)
}

/// Shortest decimal form of `v` used for wire attributes (`1`, `0.5`, `-3600`).
pub(crate) fn wire_f64(v: f64) -> String {
    if v == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
