use std::collections::HashMap;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::ids::ResourceId;
use crate::resources::ResourceLookup;
use crate::resources::model::{Asset, Effect, Format, Resource};
use crate::resources::transaction::Transaction;
use crate::validate::security::validate_media_path;

/// Result of a path lookup in [`ResourceRegistry::get_or_create_asset`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSlot<'a> {
    /// The path is already registered.
    Existing(&'a Asset),
    /// No asset for this path yet; carries the normalized path the caller should create with.
    Vacant(String),
}

impl AssetSlot<'_> {
    /// `true` when an asset for the path already exists.
    pub fn exists(&self) -> bool {
        matches!(self, Self::Existing(_))
    }

    /// The existing asset, if any.
    pub fn asset(&self) -> Option<&Asset> {
        match self {
            Self::Existing(a) => Some(a),
            Self::Vacant(_) => None,
        }
    }
}

/// Document-scoped pool of committed resources.
///
/// Owns the id counter and the path → asset index. Resources become visible only through
/// [`Transaction::commit`], in the order they were staged, so identical inputs always produce the
/// same ids and ordering.
#[derive(Debug)]
pub struct ResourceRegistry {
    pool: Vec<Resource>,
    index: HashMap<ResourceId, usize>,
    assets_by_path: HashMap<String, ResourceId>,
    next_id: u32,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    /// Empty registry; the first issued id is `r1`.
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            index: HashMap::new(),
            assets_by_path: HashMap::new(),
            next_id: 1,
        }
    }

    /// Look up the asset registered for `path`.
    ///
    /// Identity is the normalized path string, never file content. A [`AssetSlot::Vacant`]
    /// answer tells the caller to create the asset inside a transaction.
    pub fn get_or_create_asset(&self, path: &str) -> CutlineResult<AssetSlot<'_>> {
        let key = normalize_source_path(path)?;
        match self.asset_id_for_path(&key) {
            Some(id) => {
                let asset = self.asset(id).ok_or_else(|| {
                    CutlineError::construction(
                        "asset.path",
                        format!("dangling path index for {id}"),
                    )
                })?;
                Ok(AssetSlot::Existing(asset))
            }
            None => Ok(AssetSlot::Vacant(key)),
        }
    }

    /// Open a transaction against this registry.
    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Committed resource by id.
    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.index.get(&id).map(|&i| &self.pool[i])
    }

    /// Committed asset by id.
    pub fn asset(&self, id: ResourceId) -> Option<&Asset> {
        self.get(id).and_then(Resource::as_asset)
    }

    /// Committed format by id.
    pub fn format(&self, id: ResourceId) -> Option<&Format> {
        self.get(id).and_then(Resource::as_format)
    }

    /// Committed effect by id.
    pub fn effect(&self, id: ResourceId) -> Option<&Effect> {
        self.get(id).and_then(Resource::as_effect)
    }

    /// `true` when `id` is a committed resource.
    pub fn contains(&self, id: ResourceId) -> bool {
        self.index.contains_key(&id)
    }

    /// All committed resources in commit order.
    pub fn resources(&self) -> &[Resource] {
        &self.pool
    }

    /// Committed resource count.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// `true` when nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Number of ids issued so far, including ids reserved by rolled-back transactions.
    pub fn issued_ids(&self) -> u32 {
        self.next_id - 1
    }

    pub(crate) fn asset_id_for_path(&self, normalized: &str) -> Option<ResourceId> {
        self.assets_by_path.get(normalized).copied()
    }

    /// Issue `n` fresh ids. Ids are never handed out twice, even if the reserving transaction
    /// rolls back.
    pub(crate) fn allocate_ids(&mut self, n: usize) -> CutlineResult<Vec<ResourceId>> {
        let n32 = u32::try_from(n).map_err(|_| {
            CutlineError::construction("reserve_ids", format!("{n} ids is too many"))
        })?;
        let end = self.next_id.checked_add(n32).ok_or_else(|| {
            CutlineError::construction("reserve_ids", "resource id space exhausted")
        })?;
        let ids = (self.next_id..end).map(ResourceId::from_counter).collect();
        self.next_id = end;
        Ok(ids)
    }

    /// Make staged resources visible in one step. Callers have already validated the batch.
    pub(crate) fn install(&mut self, staged: Vec<Resource>) {
        for res in staged {
            let id = res.id();
            if let Resource::Asset(a) = &res {
                self.assets_by_path.insert(a.src.clone(), id);
            }
            self.index.insert(id, self.pool.len());
            self.pool.push(res);
        }
    }
}

impl ResourceLookup for ResourceRegistry {
    fn lookup(&self, id: ResourceId) -> Option<&Resource> {
        self.get(id)
    }
}

/// Normalize a media source path into its deduplication key.
///
/// Accepts plain paths and `file://` URLs, collapses duplicate separators and `.` segments, and
/// rejects parent traversals.
pub fn normalize_source_path(path: &str) -> CutlineResult<String> {
    let trimmed = path.trim();
    let raw = trimmed.strip_prefix("file://").unwrap_or(trimmed);
    if raw.is_empty() {
        return Err(CutlineError::construction(
            "asset.path",
            "asset path must be non-empty",
        ));
    }
    validate_media_path(raw)?;

    let absolute = raw.starts_with('/');
    let mut parts = Vec::<&str>::new();
    for part in raw.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        parts.push(part);
    }
    if parts.is_empty() {
        return Err(CutlineError::construction(
            "asset.path",
            "asset path must contain a file name",
        ));
    }

    let joined = parts.join("/");
    Ok(if absolute { format!("/{joined}") } else { joined })
}

#[cfg(test)]
#[path = "../../tests/unit/resources/registry.rs"]
mod tests;
