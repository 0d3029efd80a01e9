//! Error types for the schema layer
//!
//! Provides error handling for:
//! - Value parsing (tokens → typed value)
//! - Compound plugin shape checks
//! - Option registry construction

/// Errors produced while turning raw tokens into a typed value, or while
/// validating a value against its declared kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Wrong number of tokens for the kind
    #[error("expected {expected} value(s), found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Token is not a floating point number
    #[error("'{token}' is not a number")]
    NumberFormat { token: String },

    /// Boolean token other than YES/NO
    #[error("bad boolean value '{0}' (expected YES or NO)")]
    InvalidBoolToken(String),

    /// Enum token not in the option's domain
    #[error("'{value}' is not one of the admissible values")]
    UnknownEnumValue { value: String },

    /// Compound plugin rejected the token list
    #[error(transparent)]
    CompoundParse(#[from] CompoundError),

    /// Value cannot be written in the text format and read back unchanged
    #[error("'{0}' cannot be represented in a config file")]
    Unrepresentable(String),
}

impl ValueError {
    /// Create arity mismatch error
    #[must_use]
    pub fn arity(expected: usize, found: usize) -> Self {
        Self::ArityMismatch { expected, found }
    }

    /// Create number format error for a token
    pub fn number(token: impl Into<String>) -> Self {
        Self::NumberFormat {
            token: token.into(),
        }
    }
}

/// Shape errors raised by compound plugins
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompoundError {
    /// Token count does not fit the record layout
    #[error("{tag}: {found} token(s) is not a multiple of the record width {width}")]
    RecordWidth {
        tag: &'static str,
        width: usize,
        found: usize,
    },

    /// A numeric slot holds a non-numeric token
    #[error("{tag}: '{token}' is not a number")]
    NumericSlot { tag: &'static str, token: String },
}

/// Errors during option registry construction
///
/// All of these mean the option table is inconsistent with itself; a registry
/// is never produced in that state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Two options share a config-file key
    #[error("config key '{0}' is declared more than once")]
    DuplicateKey(&'static str),

    /// Key is empty, holds a delimiter or `=`, or starts a comment
    #[error("config key '{0}' cannot be written as the left side of an assignment")]
    InvalidKey(&'static str),

    /// Enum domain member would not read back as a single token
    #[error("{key}: domain member '{value}' is not a single token")]
    InvalidDomainMember { key: &'static str, value: &'static str },

    /// Description would spill out of its comment line
    #[error("{0}: description spans more than one line")]
    MultilineDescription(&'static str),

    /// Category name or description would spill out of its comment line
    #[error("category '{0}' spans more than one line")]
    MultilineCategory(&'static str),

    /// Fixed-length float array declared with no elements
    #[error("{0}: fixed-length float array must hold at least one element")]
    EmptyFixedArray(&'static str),

    /// Default value appears more than once in the enum domain
    #[error("{key}: default '{value}' appears more than once in its domain")]
    DuplicateDefaultInDomain { key: &'static str, value: String },

    /// Default value is absent from the enum domain
    #[error("{key}: default '{value}' is not in its domain")]
    DefaultNotInDomain { key: &'static str, value: String },

    /// Enumerable option declared without a domain
    #[error("{0}: enumerable option has an empty domain")]
    MissingDomain(&'static str),

    /// Option refers to a category missing from the category order
    #[error("{key}: category '{category}' is not in the category order")]
    UnlistedCategory {
        key: &'static str,
        category: &'static str,
    },

    /// Category order lists a name twice
    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(&'static str),

    /// Declared default text does not parse as the declared kind
    #[error("{key}: invalid default: {source}")]
    InvalidDefault {
        key: &'static str,
        #[source]
        source: ValueError,
    },

    /// Enum list domain contains the empty-sequence sentinel
    #[error("{0}: enum list domain may not contain NONE")]
    ReservedSentinel(&'static str),

    /// More options than field ids can address
    #[error("option table has {0} entries, more than a registry can index")]
    TooManyOptions(usize),
}

/// Result type alias for registry construction
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::arity(1, 3);
        assert_eq!(err.to_string(), "expected 1 value(s), found 3");

        let err = ValueError::InvalidBoolToken("MAYBE".to_string());
        assert!(err.to_string().contains("MAYBE"));
    }

    #[test]
    fn compound_error_converts() {
        let err: ValueError = CompoundError::RecordWidth {
            tag: "INLET",
            width: 6,
            found: 4,
        }
        .into();
        assert!(matches!(err, ValueError::CompoundParse(_)));
        assert!(err.to_string().starts_with("INLET"));
    }

    #[test]
    fn schema_error_display() {
        let err = SchemaError::UnlistedCategory {
            key: "CFL_NUMBER",
            category: "Nowhere",
        };
        assert_eq!(
            err.to_string(),
            "CFL_NUMBER: category 'Nowhere' is not in the category order"
        );
    }
}
