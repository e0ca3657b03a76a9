use crate::document::context::Document;
use crate::foundation::error::CutlineResult;
use crate::validate::media::MediaConstraintValidator;
use crate::validate::numeric::NumericRangeValidator;
use crate::validate::security::ContentSecurityValidator;
use crate::validate::structural::StructuralValidator;

/// One independent document check.
pub trait DocumentValidator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reject the document on the first rule it breaks.
    fn validate(&self, doc: &Document) -> CutlineResult<()>;
}

/// Ordered set of validators; a document passes only if all of them pass.
pub struct ValidationPipeline {
    validators: Vec<Box<dyn DocumentValidator>>,
}

impl std::fmt::Debug for ValidationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|v| v.name()))
            .finish()
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl ValidationPipeline {
    /// Structural, media, content security and numeric range validators, in that order.
    pub fn standard() -> Self {
        Self::empty()
            .with(StructuralValidator)
            .with(MediaConstraintValidator)
            .with(ContentSecurityValidator)
            .with(NumericRangeValidator)
    }

    /// Pipeline with no validators.
    pub fn empty() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Append a validator.
    pub fn with(mut self, v: impl DocumentValidator + 'static) -> Self {
        self.validators.push(Box::new(v));
        self
    }

    /// Validator names in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator in order, stopping at the first failure.
    #[tracing::instrument(skip(self, doc), fields(validators = self.validators.len()))]
    pub fn run(&self, doc: &Document) -> CutlineResult<()> {
        for v in &self.validators {
            if let Err(e) = v.validate(doc) {
                tracing::warn!(validator = v.name(), error = %e, "document rejected");
                return Err(e);
            }
            tracing::trace!(validator = v.name(), "passed");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/pipeline.rs"]
mod tests;
