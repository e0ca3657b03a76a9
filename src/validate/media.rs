use crate::document::context::Document;
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::resources::ResourceLookup;
use crate::resources::catalog::lookup_effect;
use crate::resources::constraints::{check_asset, check_asset_format_pair, check_format};
use crate::resources::model::{MediaType, Resource};
use crate::timeline::element::ElementKind;
use crate::validate::pipeline::DocumentValidator;

pub(crate) fn check_resource_media(
    res: &Resource,
    lookup: &dyn ResourceLookup,
) -> CutlineResult<()> {
    match res {
        Resource::Asset(asset) => {
            check_asset(asset)?;
            let Some(fid) = asset.format() else {
                return Ok(());
            };
            match lookup.lookup(fid) {
                Some(Resource::Format(format)) => check_asset_format_pair(asset, format),
                Some(other) => Err(CutlineError::media(
                    "asset.format",
                    format!("{fid} is a {}, not a format", other.kind()),
                )),
                None if lookup.is_pending(fid) => Ok(()),
                None => Err(CutlineError::construction(
                    "asset.format",
                    format!("format {fid} referenced by asset {} does not exist", asset.id()),
                )),
            }
        }
        Resource::Format(format) => check_format(format),
        Resource::Effect(effect) => match lookup_effect(effect.uid()) {
            Some(_) => Ok(()),
            None => Err(CutlineError::construction(
                "effect.uid",
                format!("'{}' is not a verified effect identifier", effect.uid()),
            )),
        },
    }
}

/// Media rules of every committed resource, re-checked at the (asset, format) pair level, and
/// clip lengths against their source media.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaConstraintValidator;

impl DocumentValidator for MediaConstraintValidator {
    fn name(&self) -> &'static str {
        "media"
    }

    fn validate(&self, doc: &Document) -> CutlineResult<()> {
        let registry = doc.registry();
        for res in registry.resources() {
            check_resource_media(res, registry)?;
        }
        for seq in doc.sequences() {
            for el in seq.timeline().elements() {
                let ElementKind::AssetClip { asset } = el.kind() else {
                    continue;
                };
                let Some(asset) = registry.asset(*asset) else {
                    continue;
                };
                if asset.media() != MediaType::Image && el.duration() > asset.duration() {
                    return Err(CutlineError::media(
                        format!("{}.duration", el.id()),
                        format!(
                            "clip runs {} but {} asset {} is only {}",
                            el.duration(),
                            asset.media(),
                            asset.id(),
                            asset.duration()
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/media.rs"]
mod tests;
