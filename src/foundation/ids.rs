use std::fmt;

/// Document-unique resource identifier, rendered on the wire as `r<N>`.
///
/// Only the registry mints these; there is no public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u32);

impl ResourceId {
    pub(crate) fn from_counter(n: u32) -> Self {
        Self(n)
    }

    /// Position of this id in the registry's allocation sequence (1-based).
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Index of a sequence inside a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(pub(crate) u32);
