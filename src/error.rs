//! Crate-level error types.

use std::fmt;

/// Validation failures from the user record codec and builder.
#[derive(Debug)]
pub enum CodecError {
    /// A required field was absent (or empty, for `id`) at decode or build
    /// time.
    MissingRequiredField(&'static str),
    /// A wire value had the wrong JSON type.
    TypeMismatch {
        /// Wire key, dotted for nested records (`links.html`).
        field: String,
        /// Type the field requires.
        expected: &'static str,
        /// JSON type actually found.
        actual: &'static str,
    },
    /// The input text was not a JSON object.
    Json(serde_json::Error),
}

impl CodecError {
    /// Prefix the field of a nested decode failure with its parent key.
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => Self::TypeMismatch {
                field: format!("{parent}.{field}"),
                expected,
                actual,
            },
            other => other,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "missing required field `{field}`")
            }
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for `{field}`: expected {expected}, found \
                 {actual}"
            ),
            Self::Json(e) => write!(f, "malformed JSON: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Errors from the rail selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailError {
    /// Selection or configuration index outside `[0, bound)`.
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of destinations at the time of the request.
        bound: usize,
    },
}

impl fmt::Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, bound } => write!(
                f,
                "destination index {index} out of range (destinations: \
                 {bound})"
            ),
        }
    }
}

impl std::error::Error for RailError {}

/// Errors produced by the railkit crate.
#[derive(Debug)]
pub enum RailkitError {
    /// User record decode/build failure.
    Codec(CodecError),
    /// Rail selection failure.
    Rail(RailError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RailkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::Rail(e) => write!(f, "rail error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RailkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Rail(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<CodecError> for RailkitError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

impl From<RailError> for RailkitError {
    fn from(e: RailError) -> Self {
        Self::Rail(e)
    }
}

impl From<std::io::Error> for RailkitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
