//! Built-in SU2 option table
//!
//! The solver's options, their categories and enum domains, compiled into the
//! crate. [`builtin_registry`] builds the registry on first use and shares it
//! for the life of the process. Every option also has a [`Field`] variant so
//! callers can address it without a key lookup.

use once_cell::sync::Lazy;

use crate::registry::{FieldId, OptionRegistry};

mod categories;
mod domains;

pub use categories::CATEGORIES;

/// Declare the option table
///
/// Generates the [`Field`] enum and the declaration slice from the same
/// list, so variant discriminants and table positions cannot drift apart.
macro_rules! option_table {
    ($(
        $category:ident {
            $( $variant:ident = $key:literal, $ctor:ident($($arg:expr),* $(,)?), $desc:literal; )*
        }
    )*) => {
        /// Options of the built-in table
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Field {
            $($(
                #[doc = $desc]
                $variant,
            )*)*
        }

        /// Declarations of the built-in table, indexed by [`Field`]
        pub static DECLS: &[$crate::registry::OptionDecl] = &[
            $($(
                $crate::registry::OptionDecl::$ctor($key, $category, $desc $(, $arg)*),
            )*)*
        ];

        impl Field {
            /// Every field, in declaration order
            pub const ALL: &'static [Field] = &[$($(Field::$variant,)*)*];
        }
    };
}

mod options;

pub use options::{Field, DECLS};

impl Field {
    /// Config-file key
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        DECLS[self as usize].key
    }

    /// Field id in the built-in registry
    #[inline]
    #[must_use]
    pub const fn id(self) -> FieldId {
        FieldId::new(self as u16)
    }
}

impl From<Field> for FieldId {
    fn from(field: Field) -> Self {
        field.id()
    }
}

static REGISTRY: Lazy<OptionRegistry> = Lazy::new(|| {
    OptionRegistry::build(DECLS, CATEGORIES)
        .unwrap_or_else(|err| panic!("built-in option table is inconsistent: {err}"))
});

/// The built-in SU2 option registry
///
/// # Panics
/// Panics on first use if the compiled-in table is inconsistent with itself;
/// the table is covered by tests, so this only fires after a bad edit.
#[must_use]
pub fn builtin_registry() -> &'static OptionRegistry {
    &REGISTRY
}
