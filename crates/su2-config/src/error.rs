//! Error types for configuration documents
//!
//! Provides error handling for:
//! - Read operations (text → Document)
//! - Mutation (typed or textual field updates)
//! - Write operations (Document → text)

use std::path::PathBuf;

use su2_schema::{FieldId, Kind, ValueError};

/// Errors while reading a config file
///
/// Any of these aborts the read; no partial document is returned.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Line is not of the form `KEY= value`
    #[error("line {line}: malformed option line: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Key is not a registered option
    #[error("line {line}: unknown option '{key}'")]
    UnknownOption { line: usize, key: String },

    /// Key set more than once in the same file
    #[error("line {line}: option '{key}' is set more than once")]
    DuplicateField { line: usize, key: String },

    /// Value does not parse as the option's kind
    #[error("line {line}: {key}: {source}")]
    InvalidValue {
        line: usize,
        key: &'static str,
        #[source]
        source: ValueError,
    },

    /// Underlying stream failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File could not be opened or read
    #[error("io error reading {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Create malformed line error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// 1-based line number of the offending line, if the error has one
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::UnknownOption { line, .. }
            | Self::DuplicateField { line, .. }
            | Self::InvalidValue { line, .. } => Some(*line),
            Self::Io(_) | Self::File { .. } => None,
        }
    }

    /// Offending key, if the line got far enough to name one
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownOption { key, .. } | Self::DuplicateField { key, .. } => {
                Some(key.as_str())
            }
            Self::InvalidValue { key, .. } => Some(*key),
            _ => None,
        }
    }
}

/// Errors while mutating a document
///
/// The document is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetError {
    /// Enum value outside the option's domain
    #[error("{key}: '{value}' is not one of the admissible values")]
    InvalidEnumAssignment { key: &'static str, value: String },

    /// Value variant does not match the option's kind
    #[error("{key}: expected a {expected} value, found {found}")]
    KindMismatch {
        key: &'static str,
        expected: Kind,
        found: &'static str,
    },

    /// Value is well-typed but not storable
    #[error("{key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: ValueError,
    },

    /// Field id is not in the document's registry
    #[error("no option with field id {0}")]
    UnknownField(FieldId),

    /// Key is not a registered option
    #[error("unknown option '{0}'")]
    UnknownKey(String),
}

/// Errors while writing a config file
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Underlying stream failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File could not be created or written
    #[error("io error writing {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

/// Combined configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Read failure
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Mutation failure
    #[error("set error: {0}")]
    Set(#[from] SetError),

    /// Write failure
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let err = ReadError::malformed(12, "more than one '='");
        assert_eq!(err.to_string(), "line 12: malformed option line: more than one '='");
        assert_eq!(err.line(), Some(12));
        assert_eq!(err.key(), None);
    }

    #[test]
    fn read_error_carries_key() {
        let err = ReadError::UnknownOption {
            line: 3,
            key: "MARKER_WALL".into(),
        };
        assert_eq!(err.key(), Some("MARKER_WALL"));
        assert!(err.to_string().contains("MARKER_WALL"));
    }

    #[test]
    fn set_error_display() {
        let err = SetError::KindMismatch {
            key: "CFL_NUMBER",
            expected: Kind::Scalar,
            found: "Bool",
        };
        assert_eq!(err.to_string(), "CFL_NUMBER: expected a Scalar value, found Bool");
    }

    #[test]
    fn combined_error_wraps() {
        let err: ConfigError = SetError::UnknownKey("MACH".into()).into();
        assert!(matches!(err, ConfigError::Set(_)));
        assert_eq!(err.to_string(), "set error: unknown option 'MACH'");
    }
}
