use std::collections::HashMap;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::ids::ResourceId;
use crate::resources::ResourceLookup;
use crate::resources::catalog::lookup_effect;
use crate::resources::constraints::{check_asset_spec, check_format_spec};
use crate::resources::model::{
    Asset, AssetSpec, AudioProps, AudioRate, Effect, EffectSpec, Format, FormatSpec, Resource,
};
use crate::resources::registry::{ResourceRegistry, normalize_source_path};
use crate::validate::check_resource;

/// Outcome of a successful [`Transaction::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Ids that became visible, in staging order.
    pub committed: Vec<ResourceId>,
    /// Reserved ids that were never used. They stay retired.
    pub unused: Vec<ResourceId>,
}

/// Atomic batch of resource creations against a [`ResourceRegistry`].
///
/// Nothing staged here is visible through the registry until [`Transaction::commit`]. Both
/// `commit` and `rollback` consume the transaction, so neither can run twice; dropping an open
/// transaction rolls it back. Reserved ids are never reclaimed.
#[derive(Debug)]
pub struct Transaction<'r> {
    registry: &'r mut ResourceRegistry,
    reserved: Vec<ResourceId>,
    staged: Vec<Resource>,
    staged_paths: HashMap<String, ResourceId>,
    finished: bool,
}

struct StagedView<'a> {
    registry: &'a ResourceRegistry,
    staged: &'a [Resource],
    pending: &'a [ResourceId],
}

impl ResourceLookup for StagedView<'_> {
    fn lookup(&self, id: ResourceId) -> Option<&Resource> {
        self.registry
            .get(id)
            .or_else(|| self.staged.iter().find(|r| r.id() == id))
    }

    fn is_pending(&self, id: ResourceId) -> bool {
        self.pending.contains(&id)
    }
}

impl<'r> Transaction<'r> {
    pub(crate) fn new(registry: &'r mut ResourceRegistry) -> Self {
        Self {
            registry,
            reserved: Vec::new(),
            staged: Vec::new(),
            staged_paths: HashMap::new(),
            finished: false,
        }
    }

    /// Reserve `n` fresh ids, in ascending order.
    pub fn reserve_ids(&mut self, n: usize) -> CutlineResult<Vec<ResourceId>> {
        let ids = self.registry.allocate_ids(n)?;
        self.reserved.extend_from_slice(&ids);
        tracing::debug!(count = n, first = ?ids.first(), "reserved resource ids");
        Ok(ids)
    }

    /// Asset id already registered (committed or staged here) for `path`.
    pub fn get_or_create_asset(&self, path: &str) -> CutlineResult<Option<ResourceId>> {
        let key = normalize_source_path(path)?;
        Ok(self
            .registry
            .asset_id_for_path(&key)
            .or_else(|| self.staged_paths.get(&key).copied()))
    }

    /// Stage a new asset under reserved id `id`.
    ///
    /// A format reference may point at a format staged later in this transaction; the pair is
    /// checked again at commit.
    pub fn create_asset(&mut self, id: ResourceId, spec: AssetSpec) -> CutlineResult<ResourceId> {
        self.ensure_reserved(id, "asset.id")?;
        check_asset_spec(&spec)?;

        let src = normalize_source_path(&spec.path)?;
        if let Some(existing) = self
            .registry
            .asset_id_for_path(&src)
            .or_else(|| self.staged_paths.get(&src).copied())
        {
            return Err(CutlineError::construction(
                "asset.path",
                format!("'{src}' is already registered as {existing}"),
            ));
        }

        let audio = match (spec.audio_channels, spec.audio_rate) {
            (Some(channels), Some(hz)) => Some(AudioProps {
                sources: spec.audio_sources.unwrap_or(1),
                channels,
                rate: AudioRate::from_hz(hz)?,
            }),
            _ => None,
        };
        spec.start
            .checked_add(spec.duration)
            .map_err(|e| e.at_field("asset.duration"))?;

        let asset = Asset {
            id,
            name: spec.name,
            src: src.clone(),
            media: spec.media,
            start: spec.start,
            duration: spec.duration,
            has_video: spec.has_video,
            has_audio: spec.has_audio,
            format: spec.format,
            audio,
        };
        self.stage(Resource::Asset(asset))?;
        self.staged_paths.insert(src, id);
        Ok(id)
    }

    /// Stage a new format under reserved id `id`.
    pub fn create_format(&mut self, id: ResourceId, spec: FormatSpec) -> CutlineResult<ResourceId> {
        self.ensure_reserved(id, "format.id")?;
        check_format_spec(&spec)?;
        let format = Format {
            id,
            name: spec.name,
            media: spec.media,
            width: spec.width,
            height: spec.height,
            color_space: spec.color_space,
            frame_duration: spec.frame_duration,
        };
        self.stage(Resource::Format(format))?;
        Ok(id)
    }

    /// Stage a new effect under reserved id `id`. The identifier must be in the verified catalog.
    pub fn create_effect(&mut self, id: ResourceId, spec: EffectSpec) -> CutlineResult<ResourceId> {
        self.ensure_reserved(id, "effect.id")?;
        if lookup_effect(&spec.uid).is_none() {
            return Err(CutlineError::construction(
                "effect.uid",
                format!("'{}' is not a verified effect identifier", spec.uid),
            ));
        }
        let effect = Effect {
            id,
            name: spec.name,
            uid: spec.uid,
        };
        self.stage(Resource::Effect(effect))?;
        Ok(id)
    }

    /// Resources staged so far, in staging order.
    pub fn staged(&self) -> &[Resource] {
        &self.staged
    }

    /// Reserved ids not yet used by a create call.
    pub fn unused_reserved(&self) -> &[ResourceId] {
        &self.reserved
    }

    /// Re-validate the whole batch against the registry and make it visible in one step.
    ///
    /// On failure every staged resource is discarded and the registry is left as it was before
    /// the transaction began (apart from retired ids).
    #[tracing::instrument(skip(self), fields(staged = self.staged.len()))]
    pub fn commit(mut self) -> CutlineResult<CommitReceipt> {
        self.finished = true;
        let staged = std::mem::take(&mut self.staged);

        let check = {
            let view = StagedView {
                registry: &*self.registry,
                staged: &staged,
                pending: &[],
            };
            staged
                .iter()
                .try_for_each(|res| check_resource(res, &view))
        };
        if let Err(e) = check {
            tracing::warn!(error = %e, discarded = staged.len(), "commit aborted");
            return Err(CutlineError::transaction(
                format!("commit aborted, {} staged resources discarded", staged.len()),
                e,
            ));
        }

        let committed: Vec<ResourceId> = staged.iter().map(Resource::id).collect();
        self.registry.install(staged);
        tracing::debug!(count = committed.len(), "committed resources");
        Ok(CommitReceipt {
            committed,
            unused: std::mem::take(&mut self.reserved),
        })
    }

    /// Discard every staged resource. Returns how many were dropped.
    #[tracing::instrument(skip(self), fields(staged = self.staged.len()))]
    pub fn rollback(mut self) -> usize {
        self.finished = true;
        let discarded = self.staged.len();
        self.staged.clear();
        self.staged_paths.clear();
        tracing::debug!(discarded, "rolled back transaction");
        discarded
    }

    fn ensure_reserved(&self, id: ResourceId, field: &str) -> CutlineResult<()> {
        if self.reserved.contains(&id) {
            return Ok(());
        }
        let why = if self.staged.iter().any(|r| r.id() == id) {
            "was already used in this transaction"
        } else {
            "was not reserved by this transaction"
        };
        Err(CutlineError::construction(field, format!("id {id} {why}")))
    }

    fn stage(&mut self, res: Resource) -> CutlineResult<()> {
        let id = res.id();
        {
            let pending: Vec<ResourceId> =
                self.reserved.iter().copied().filter(|r| *r != id).collect();
            let view = StagedView {
                registry: &*self.registry,
                staged: &self.staged,
                pending: &pending,
            };
            check_resource(&res, &view)?;
        }
        self.reserved.retain(|r| *r != id);
        tracing::debug!(%id, kind = %res.kind(), "staged resource");
        self.staged.push(res);
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished && !self.staged.is_empty() {
            tracing::debug!(
                discarded = self.staged.len(),
                "transaction dropped without commit; rolling back"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resources/transaction.rs"]
mod tests;
