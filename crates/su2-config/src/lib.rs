//! SU2 Configuration Documents
//!
//! Read, mutate, compare and write SU2 config files against an option
//! registry from `su2_schema`.
//!
//! # Core Operations
//!
//! - **Read**: parse `KEY= value` lines into a [`Document`] plus the
//!   [`SelectionSet`] of fields the file set
//! - **Mutate**: typed, enum-checked or textual field updates that never leave
//!   a field half-changed
//! - **Diff**: field-by-field comparison of two documents
//! - **Write**: render the document, suppressing options that still hold
//!   their default unless selected
//!
//! # Architecture
//!
//! ```text
//! text → reader → Document ⇄ set_field / set_from_text → writer → text
//!                    ↑
//!         OptionRegistry (defaults, kinds, write order)
//! ```
//!
//! # Example
//!
//! ```rust
//! use su2_config::{read_str, to_config_string, SelectionSet, WriterConfig};
//! use su2_schema::{builtin_registry, Field, Value};
//!
//! let registry = builtin_registry();
//! let outcome = read_str(registry, "MACH_NUMBER= 0.8\n").unwrap();
//! let mut doc = outcome.document;
//! doc.set_field(Field::RestartSol, Value::Bool(true)).unwrap();
//!
//! let text = to_config_string(&doc, &SelectionSet::none(), &WriterConfig::compact());
//! assert_eq!(text, "RESTART_SOL= YES\nMACH_NUMBER= 0.8\n");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod reader;
pub mod selection;
pub mod writer;

// Re-exports for convenience
pub use config::WriterConfig;
pub use document::{Document, FieldDiff};
pub use error::{ConfigError, ConfigResult, ReadError, SetError, WriteError};
pub use reader::{read_document, read_file, read_str, ReadOutcome};
pub use selection::SelectionSet;
pub use writer::{to_config_string, write_document, write_file, HEADER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with config documents
    pub use crate::config::WriterConfig;
    pub use crate::document::{Document, FieldDiff};
    pub use crate::error::{ConfigError, ReadError, SetError, WriteError};
    pub use crate::reader::{read_document, read_file, read_str, ReadOutcome};
    pub use crate::selection::SelectionSet;
    pub use crate::writer::{to_config_string, write_document, write_file};
    pub use su2_schema::{builtin_registry, Field, FieldId, OptionRegistry, Value};
}
