//! Timeline elements and the per-sequence placement validator.

pub(crate) mod element;
pub(crate) mod validator;
