//! SU2 Option Schema
//!
//! Typed metadata for every option of an SU2 configuration file, and the
//! value rules shared by the reader and the writer.
//!
//! # Core Concepts
//!
//! - [`Kind`]: declared kind of an option, with its parse rule
//! - [`Value`]: typed value with exactly one canonical text form
//! - [`CompoundValue`]: plugin trait for values the primitive kinds cannot express
//! - [`OptionRegistry`]: read-only option table with key lookup and write order
//! - [`builtin_registry`]: the solver's own option table, built once per process
//!
//! # Architecture
//!
//! ```text
//! OptionDecl table + Category table → OptionRegistry::build → OptionSchema (per field)
//!                                                               ↓
//!                           raw tokens → Kind::parse → Value → Value::render → text
//! ```
//!
//! # Example
//!
//! ```rust
//! use su2_schema::{builtin_registry, tokenize, Value};
//!
//! let registry = builtin_registry();
//! let schema = registry.lookup_by_key("CFL_NUMBER").unwrap();
//! let value = schema.kind().parse(&tokenize("2.5"), schema.domain()).unwrap();
//! assert_eq!(value, Value::Scalar(2.5));
//! assert_eq!(schema.default_text(), "1.25");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod builtin;
pub mod category;
pub mod compound;
pub mod error;
pub mod kind;
pub mod registry;
pub mod token;
pub mod value;

// Re-exports for convenience
pub use builtin::{builtin_registry, Field};
pub use category::{Category, CategoryOrder};
pub use compound::{
    CompoundBox, CompoundPlugin, CompoundValue, InletList, InletRecord, ParamList, PeriodicList,
    PeriodicRecord, StringDoubleList,
};
pub use error::{CompoundError, SchemaError, SchemaResult, ValueError};
pub use kind::Kind;
pub use registry::{FieldId, OptionDecl, OptionRegistry, OptionSchema};
pub use token::{is_sentinel, is_single_token, tokenize, COMMENT, NONE};
pub use value::{format_float, same_float, Value};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with option schemas
    pub use crate::builtin::{builtin_registry, Field};
    pub use crate::compound::{CompoundPlugin, CompoundValue};
    pub use crate::error::{SchemaError, ValueError};
    pub use crate::kind::Kind;
    pub use crate::registry::{FieldId, OptionDecl, OptionRegistry, OptionSchema};
    pub use crate::value::Value;
}
