use crate::document::config::DocumentConfig;
use crate::document::fingerprint::{DocumentFingerprint, fingerprint_document};
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::foundation::ids::{ResourceId, SequenceId};
use crate::resources::model::Resource;
use crate::resources::registry::{AssetSlot, ResourceRegistry};
use crate::resources::transaction::Transaction;
use crate::time::value::Duration;
use crate::timeline::element::TimelineElement;
use crate::timeline::validator::{TimelineConfig, TimelineValidator};
use crate::validate::pipeline::ValidationPipeline;
use crate::validate::structural::{check_element_reference, check_sequence_format};

/// Named timeline bound to a video format.
#[derive(Clone, Debug)]
pub struct Sequence {
    name: String,
    format: ResourceId,
    timeline: TimelineValidator,
}

impl Sequence {
    /// Sequence name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Video format the sequence renders in.
    pub fn format(&self) -> ResourceId {
        self.format
    }

    /// Placed elements and their placement rules.
    pub fn timeline(&self) -> &TimelineValidator {
        &self.timeline
    }
}

/// One project: its configuration, resource pool and sequences.
///
/// Every operation goes through this value; there is no process-wide state, so documents are
/// independent of each other.
#[derive(Debug, Default)]
pub struct Document {
    config: DocumentConfig,
    registry: ResourceRegistry,
    sequences: Vec<Sequence>,
}

impl Document {
    /// Empty document with `config`.
    pub fn new(config: DocumentConfig) -> CutlineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: ResourceRegistry::new(),
            sequences: Vec::new(),
        })
    }

    /// Document settings.
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Committed resources.
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Open a resource transaction.
    pub fn begin(&mut self) -> Transaction<'_> {
        self.registry.begin()
    }

    /// Committed asset for `path`, or the normalized path to create it under.
    pub fn get_or_create_asset(&self, path: &str) -> CutlineResult<AssetSlot<'_>> {
        self.registry.get_or_create_asset(path)
    }

    /// Add a sequence using the document's timeline config.
    pub fn add_sequence(
        &mut self,
        name: impl Into<String>,
        format: ResourceId,
        duration: Duration,
    ) -> CutlineResult<SequenceId> {
        let config = self.config.timeline;
        self.add_sequence_with(name, format, duration, config)
    }

    /// Add a sequence with its own timeline config.
    pub fn add_sequence_with(
        &mut self,
        name: impl Into<String>,
        format: ResourceId,
        duration: Duration,
        config: TimelineConfig,
    ) -> CutlineResult<SequenceId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CutlineError::construction(
                "sequence.name",
                "sequence name must be non-empty",
            ));
        }
        if self.sequences.iter().any(|s| s.name == name) {
            return Err(CutlineError::construction(
                "sequence.name",
                format!("a sequence named '{name}' already exists"),
            ));
        }
        let seq = Sequence {
            name,
            format,
            timeline: TimelineValidator::new(duration, config)?,
        };
        check_sequence_format(&self.registry, &seq)?;

        let id = SequenceId(u32::try_from(self.sequences.len()).map_err(|_| {
            CutlineError::construction("sequence", "too many sequences")
        })?);
        tracing::debug!(name = %seq.name, %format, total = %duration, "added sequence");
        self.sequences.push(seq);
        Ok(id)
    }

    /// Place an element on a sequence. Its reference must resolve to a committed resource of
    /// the right kind.
    pub fn place(
        &mut self,
        seq: SequenceId,
        element: TimelineElement,
    ) -> CutlineResult<&TimelineElement> {
        check_element_reference(&self.registry, &element)?;
        let sequence = self.sequences.get_mut(seq.0 as usize).ok_or_else(|| {
            CutlineError::construction("sequence", format!("no sequence {}", seq.0))
        })?;
        sequence.timeline.add(element)
    }

    /// Sequence by id.
    pub fn sequence(&self, id: SequenceId) -> Option<&Sequence> {
        self.sequences.get(id.0 as usize)
    }

    /// Sequence by name.
    pub fn sequence_named(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.name == name)
    }

    /// All sequences in creation order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Run every timeline rule and `pipeline`. Only a document that passes all of them hands out
    /// a [`ValidatedDocument`].
    #[tracing::instrument(
        skip(self, pipeline),
        fields(name = %self.config.name, sequences = self.sequences.len())
    )]
    pub fn finalize(
        &self,
        pipeline: &ValidationPipeline,
    ) -> CutlineResult<ValidatedDocument<'_>> {
        for seq in &self.sequences {
            if let Err(e) = seq.timeline.validate_complete() {
                tracing::warn!(sequence = %seq.name, error = %e, "document rejected");
                return Err(e);
            }
        }
        pipeline.run(self)?;
        tracing::debug!(resources = self.registry.len(), "document validated");
        Ok(ValidatedDocument { doc: self })
    }
}

/// Read-only view of a document that passed [`Document::finalize`].
#[derive(Clone, Copy, Debug)]
pub struct ValidatedDocument<'a> {
    doc: &'a Document,
}

impl<'a> ValidatedDocument<'a> {
    /// Document settings.
    pub fn config(&self) -> &'a DocumentConfig {
        &self.doc.config
    }

    /// Committed resources in commit order.
    pub fn resources(&self) -> &'a [Resource] {
        self.doc.registry.resources()
    }

    /// Sequences in creation order.
    pub fn sequences(&self) -> &'a [Sequence] {
        &self.doc.sequences
    }

    /// Stable content hash for golden-file comparisons.
    pub fn fingerprint(&self) -> DocumentFingerprint {
        fingerprint_document(self.doc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/context.rs"]
mod tests;
