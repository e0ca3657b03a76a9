//! Per-field well-formedness: non-empty names and ids, references that resolve to the right
//! kind of resource, keyframe ordering and attribute keys.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::context::{Document, Sequence};
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::resources::ResourceLookup;
use crate::resources::catalog::{EffectCategory, lookup_effect};
use crate::resources::model::{MediaType, Resource};
use crate::timeline::element::{ElementKind, TimelineElement};
use crate::validate::pipeline::DocumentValidator;

static ATTRIBUTE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("BUG: invalid ATTRIBUTE_KEY_RE regex literal")
});

fn require_non_empty(field: &str, v: &str) -> CutlineResult<()> {
    if v.trim().is_empty() {
        return Err(CutlineError::construction(field, "must be non-empty"));
    }
    Ok(())
}

pub(crate) fn check_resource_fields(res: &Resource) -> CutlineResult<()> {
    match res {
        Resource::Asset(a) => {
            require_non_empty("asset.name", a.name())?;
            require_non_empty("asset.path", a.src())?;
            a.start().validate().map_err(|e| e.at_field("asset.start"))?;
            a.duration()
                .validate()
                .map_err(|e| e.at_field("asset.duration"))
        }
        Resource::Format(f) => match f.name() {
            Some(name) => require_non_empty("format.name", name),
            None => Ok(()),
        },
        Resource::Effect(e) => {
            require_non_empty("effect.name", e.name())?;
            require_non_empty("effect.uid", e.uid())
        }
    }
}

/// The element's resource must exist and be of the kind its element type needs.
pub(crate) fn check_element_reference(
    lookup: &dyn ResourceLookup,
    el: &TimelineElement,
) -> CutlineResult<()> {
    let Some(id) = el.kind.reference() else {
        return Ok(());
    };
    let field = format!("{}.ref", el.id);
    let res = lookup.lookup(id).ok_or_else(|| {
        CutlineError::construction(&field, format!("{id} is not a committed resource"))
    })?;

    let wanted = match &el.kind {
        ElementKind::AssetClip { .. } => {
            return match res {
                Resource::Asset(_) => Ok(()),
                other => Err(CutlineError::construction(
                    field,
                    format!("asset-clip needs an asset, {id} is a {}", other.kind()),
                )),
            };
        }
        ElementKind::Video { .. } => EffectCategory::Generator,
        ElementKind::Title { .. } => EffectCategory::Title,
        ElementKind::Gap => return Ok(()),
    };
    let effect = res.as_effect().ok_or_else(|| {
        CutlineError::construction(
            &field,
            format!("{} needs an effect, {id} is a {}", el.kind.kind_name(), res.kind()),
        )
    })?;
    match lookup_effect(effect.uid()) {
        Some(d) if d.category == wanted => Ok(()),
        _ => Err(CutlineError::construction(
            field,
            format!(
                "{} needs a {wanted:?} effect, {id} ('{}') is not one",
                el.kind.kind_name(),
                effect.uid()
            ),
        )),
    }
}

pub(crate) fn check_element_fields(el: &TimelineElement) -> CutlineResult<()> {
    if el.id.is_empty() || el.id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(CutlineError::construction(
            "element.id",
            format!("'{}' is not a valid element id", el.id),
        ));
    }
    if let Some(name) = &el.name {
        require_non_empty(&format!("{}.name", el.id), name)?;
    }
    if matches!(el.kind, ElementKind::Gap) && !el.lane.is_primary() {
        return Err(CutlineError::construction(
            format!("{}.lane", el.id),
            format!("gap elements belong on the spine, found lane {}", el.lane),
        ));
    }
    for key in el.attributes.keys() {
        if !ATTRIBUTE_KEY_RE.is_match(key) {
            return Err(CutlineError::construction(
                format!("{}.attributes", el.id),
                format!("'{key}' is not a valid attribute name"),
            ));
        }
    }
    for track in &el.animations {
        let field = format!("{}.{}", el.id, track.param.wire());
        track.validate_shape(&field, el.duration())?;
    }
    Ok(())
}

pub(crate) fn check_sequence_format(
    lookup: &dyn ResourceLookup,
    seq: &Sequence,
) -> CutlineResult<()> {
    let field = format!("{}.format", seq.name());
    let res = lookup.lookup(seq.format()).ok_or_else(|| {
        CutlineError::construction(&field, format!("{} is not a committed resource", seq.format()))
    })?;
    match res.as_format() {
        Some(f) if f.media() == MediaType::Video => Ok(()),
        Some(f) => Err(CutlineError::media(
            field,
            format!("sequences need a video format, {} is {}", f.id(), f.media()),
        )),
        None => Err(CutlineError::construction(
            field,
            format!("{} is a {}, not a format", res.id(), res.kind()),
        )),
    }
}

/// Field shape of every resource, sequence and element.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralValidator;

impl DocumentValidator for StructuralValidator {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn validate(&self, doc: &Document) -> CutlineResult<()> {
        require_non_empty("document.name", &doc.config().name)?;
        let registry = doc.registry();
        for res in registry.resources() {
            check_resource_fields(res)?;
        }
        for seq in doc.sequences() {
            require_non_empty("sequence.name", seq.name())?;
            check_sequence_format(registry, seq)?;
            for el in seq.timeline().elements() {
                check_element_fields(el)?;
                check_element_reference(registry, el)?;
                el.offset()
                    .validate()
                    .map_err(|e| e.at_field(format!("{}.offset", el.id)))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/structural.rs"]
mod tests;
