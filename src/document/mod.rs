//! Document-scoped context: configuration, the resource registry and its sequences.

pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod fingerprint;
