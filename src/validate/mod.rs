//! Independent validators, each owning one concern, and the pipeline that composes them.
//!
//! A document is accepted only when every validator passes; the first failure rejects it.

pub(crate) mod external;
pub(crate) mod media;
pub(crate) mod numeric;
pub(crate) mod pipeline;
pub(crate) mod security;
pub(crate) mod structural;

use crate::foundation::error::CutlineResult;
use crate::resources::ResourceLookup;
use crate::resources::model::Resource;

/// Every per-resource rule: field shape, media constraints and content security of names.
///
/// `lookup` resolves format references; ids it reports as pending are skipped and checked again
/// at commit.
pub(crate) fn check_resource(res: &Resource, lookup: &dyn ResourceLookup) -> CutlineResult<()> {
    structural::check_resource_fields(res)?;
    media::check_resource_media(res, lookup)?;
    security::check_resource_text(res, security::MAX_TEXT_LEN)
}
