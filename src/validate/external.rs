//! Optional final check through an external XML schema tool (`xmllint` by default).
//!
//! The tool is feature-detected; when it is missing every check reports
//! [`SchemaCheck::Unavailable`] instead of failing.

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::foundation::error::{CutlineError, CutlineResult};

/// Options for [`SchemaTool`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SchemaToolOpts {
    /// Program name or path.
    pub program: String,
    /// Extra arguments placed before the schema flags.
    pub extra_args: Vec<String>,
}

impl Default for SchemaToolOpts {
    fn default() -> Self {
        Self {
            program: "xmllint".to_owned(),
            extra_args: Vec::new(),
        }
    }
}

/// Schema language of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// Document type definition.
    Dtd,
    /// XML Schema.
    Xsd,
}

impl SchemaKind {
    fn flag(self) -> &'static str {
        match self {
            Self::Dtd => "--dtdvalid",
            Self::Xsd => "--schema",
        }
    }
}

/// Verdict of the external tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaCheck {
    /// The document conforms.
    Valid,
    /// The document does not conform.
    Invalid {
        /// Tool output describing the failures.
        diagnostics: String,
    },
    /// The tool is not installed.
    Unavailable,
}

impl SchemaCheck {
    /// `true` for [`SchemaCheck::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Pass/fail oracle over a fully serialized document.
#[derive(Clone, Debug, Default)]
pub struct SchemaTool {
    opts: SchemaToolOpts,
}

impl SchemaTool {
    /// Tool with explicit options.
    pub fn new(opts: SchemaToolOpts) -> Self {
        Self { opts }
    }

    /// Program this tool runs.
    pub fn program(&self) -> &str {
        &self.opts.program
    }

    /// `true` when the program can be started.
    pub fn is_available(&self) -> bool {
        Command::new(&self.opts.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Validate `xml` against the DTD at `dtd`.
    pub fn validate_dtd(&self, xml: &str, dtd: impl AsRef<Path>) -> CutlineResult<SchemaCheck> {
        self.run(SchemaKind::Dtd, xml, dtd.as_ref())
    }

    /// Validate `xml` against the XML Schema at `xsd`.
    pub fn validate_xsd(&self, xml: &str, xsd: impl AsRef<Path>) -> CutlineResult<SchemaCheck> {
        self.run(SchemaKind::Xsd, xml, xsd.as_ref())
    }

    #[tracing::instrument(skip(self, xml), fields(program = %self.opts.program, bytes = xml.len()))]
    fn run(&self, kind: SchemaKind, xml: &str, schema: &Path) -> CutlineResult<SchemaCheck> {
        if !self.is_available() {
            tracing::debug!("schema tool not found; skipping");
            return Ok(SchemaCheck::Unavailable);
        }
        if !schema.is_file() {
            return Err(self.failure(format!("schema file '{}' does not exist", schema.display())));
        }

        let mut cmd = Command::new(&self.opts.program);
        cmd.args(&self.opts.extra_args)
            .args(["--noout", kind.flag()])
            .arg(schema)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        let mut child = cmd
            .spawn()
            .map_err(|e| self.failure(format!("failed to spawn: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failure("failed to open stdin"))?;
        let input = xml.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .map_err(|e| self.failure(format!("failed to wait for the tool: {e}")))?;
        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(self.failure(format!("failed to write the document: {e}"))),
            Err(_) => return Err(self.failure("stdin writer panicked")),
        }

        let diagnostics = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        match output.status.code() {
            Some(0) => Ok(SchemaCheck::Valid),
            // 1..=4: parse, DTD or schema validation errors in the document itself.
            Some(1..=4) => {
                tracing::warn!(%diagnostics, "document failed schema validation");
                Ok(SchemaCheck::Invalid { diagnostics })
            }
            code => Err(self.failure(format!("exited with {code:?}: {diagnostics}"))),
        }
    }

    fn failure(&self, msg: impl Into<String>) -> CutlineError {
        CutlineError::external_tool(&self.opts.program, msg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/external.rs"]
mod tests;
