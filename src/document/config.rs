use std::io::Read;

use crate::foundation::error::{CutlineError, CutlineResult};
use crate::timeline::validator::TimelineConfig;
use crate::validate::security::MAX_TEXT_LEN;

/// Caller-supplied document settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Project name.
    pub name: String,
    /// Strictness applied to sequences created without an explicit config.
    pub timeline: TimelineConfig,
    /// Free text length cap; may only tighten the built-in limit.
    pub max_text_len: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".to_owned(),
            timeline: TimelineConfig::default(),
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

impl DocumentConfig {
    /// Config named `name` with default settings.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> CutlineResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CutlineError::construction("config", format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config from a reader.
    pub fn from_reader<R: Read>(r: R) -> CutlineResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CutlineError::construction("config", format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the settings themselves.
    pub fn validate(&self) -> CutlineResult<()> {
        if self.name.trim().is_empty() {
            return Err(CutlineError::construction(
                "config.name",
                "document name must be non-empty",
            ));
        }
        self.timeline.validate()?;
        if self.max_text_len == 0 || self.max_text_len > MAX_TEXT_LEN {
            return Err(CutlineError::range(
                "config.max_text_len",
                format!("{} outside [1, {MAX_TEXT_LEN}]", self.max_text_len),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/config.rs"]
mod tests;
