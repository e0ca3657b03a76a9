//! Resource pool, path deduplication, and atomic resource transactions.

use crate::foundation::ids::ResourceId;
use crate::resources::model::Resource;

pub(crate) mod catalog;
pub(crate) mod constraints;
pub(crate) mod model;
pub(crate) mod registry;
pub(crate) mod transaction;

/// Read access to resources by id, used by validators that resolve references.
pub trait ResourceLookup {
    /// Resource for `id`, if visible to this view.
    fn lookup(&self, id: ResourceId) -> Option<&Resource>;

    /// `true` when `id` is reserved but not yet created, so a reference to it is a forward
    /// reference rather than a dangling one.
    fn is_pending(&self, _id: ResourceId) -> bool {
        false
    }
}
