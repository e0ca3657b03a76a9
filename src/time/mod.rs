//! Exact rational time on the canonical frame grid.

pub(crate) mod range;
pub(crate) mod rational;
pub(crate) mod value;
