/// Convenience result type used across cutline.
pub type CutlineResult<T> = Result<T, CutlineError>;

/// Machine-checkable tag for a [`CutlineError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input to a time, lane, or resource constructor.
    Construction,
    /// Asset or format property set inconsistent with its media type.
    MediaConstraint,
    /// Untrusted text failed a content-security rule.
    Security,
    /// Numeric or boundary field outside its legal interval.
    Range,
    /// Placement out of bounds, lane gap, or same-lane overlap.
    Timeline,
    /// Aggregate failure while committing a transaction.
    Transaction,
    /// The optional external schema tool failed or reported an invalid document.
    ExternalTool,
    /// Wrapped lower-level error.
    Other,
}

/// Top-level error taxonomy used by all cutline APIs.
///
/// Every variant carries the field (or element id) it is attributed to, so callers can point at
/// the exact input that was rejected.
#[derive(thiserror::Error, Debug)]
pub enum CutlineError {
    /// Malformed constructor input.
    #[error("construction error: {field}: {message}")]
    Construction {
        /// Offending field.
        field: String,
        /// Human-readable reason.
        message: String,
    },

    /// Media type rule violated by an asset or format.
    #[error("media constraint violation: {field}: {message}")]
    MediaConstraint {
        /// Offending field.
        field: String,
        /// Human-readable reason.
        message: String,
    },

    /// Untrusted text rejected by the content security rules.
    #[error("security violation: {field}: {message}")]
    Security {
        /// Offending field.
        field: String,
        /// Human-readable reason.
        message: String,
    },

    /// Numeric value out of range or non-finite.
    #[error("range violation: {field}: {message}")]
    Range {
        /// Offending field.
        field: String,
        /// Human-readable reason.
        message: String,
    },

    /// Timeline placement rejected.
    #[error("timeline constraint violation: {element}: {message}")]
    Timeline {
        /// Element id (or lane label) the failure is attributed to.
        element: String,
        /// Human-readable reason.
        message: String,
    },

    /// Commit aborted; every staged resource was discarded.
    #[error("transaction failure: {message}")]
    Transaction {
        /// Human-readable summary.
        message: String,
        /// The failure that aborted the commit.
        #[source]
        source: Box<CutlineError>,
    },

    /// External schema tool could not run or rejected the document.
    #[error("external tool failure: {tool}: {message}")]
    ExternalTool {
        /// Tool program name.
        tool: String,
        /// Diagnostic text.
        message: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CutlineError {
    /// Build a [`CutlineError::Construction`] value.
    pub fn construction(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Construction {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Build a [`CutlineError::MediaConstraint`] value.
    pub fn media(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MediaConstraint {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Build a [`CutlineError::Security`] value.
    pub fn security(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Security {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Build a [`CutlineError::Range`] value.
    pub fn range(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Range {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Build a [`CutlineError::Timeline`] value.
    pub fn timeline(element: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Timeline {
            element: element.into(),
            message: msg.into(),
        }
    }

    /// Wrap `source` as the cause of an aborted commit.
    pub fn transaction(msg: impl Into<String>, source: CutlineError) -> Self {
        Self::Transaction {
            message: msg.into(),
            source: Box::new(source),
        }
    }

    /// Build a [`CutlineError::ExternalTool`] value.
    pub fn external_tool(tool: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: msg.into(),
        }
    }

    /// Tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Construction { .. } => ErrorKind::Construction,
            Self::MediaConstraint { .. } => ErrorKind::MediaConstraint,
            Self::Security { .. } => ErrorKind::Security,
            Self::Range { .. } => ErrorKind::Range,
            Self::Timeline { .. } => ErrorKind::Timeline,
            Self::Transaction { .. } => ErrorKind::Transaction,
            Self::ExternalTool { .. } => ErrorKind::ExternalTool,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Field, element id, or tool the error is attributed to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Construction { field, .. }
            | Self::MediaConstraint { field, .. }
            | Self::Security { field, .. }
            | Self::Range { field, .. } => Some(field),
            Self::Timeline { element, .. } => Some(element),
            Self::Transaction { source, .. } => source.field(),
            Self::ExternalTool { tool, .. } => Some(tool),
            Self::Other(_) => None,
        }
    }

    /// Re-attribute a field-scoped error to `field`.
    ///
    /// Timeline, transaction, tool and wrapped errors are returned unchanged.
    pub(crate) fn at_field(self, field: impl Into<String>) -> Self {
        match self {
            Self::Construction { message, .. } => Self::Construction {
                field: field.into(),
                message,
            },
            Self::MediaConstraint { message, .. } => Self::MediaConstraint {
                field: field.into(),
                message,
            },
            Self::Security { message, .. } => Self::Security {
                field: field.into(),
                message,
            },
            Self::Range { message, .. } => Self::Range {
                field: field.into(),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
