//! Compound value plugins
//!
//! Values whose shape the primitive kinds cannot express (freeform parameter
//! blobs, paired string/float lists, boundary descriptors) are implemented as
//! plugins. A plugin is any type implementing [`CompoundValue`]; the option
//! table refers to it through a [`CompoundPlugin`] capability, and the rest of
//! the system only ever sees the erased [`CompoundBox`].
//!
//! Adding a new compound option type means implementing [`CompoundValue`]
//! and declaring `CompoundPlugin::new::<T>("TAG")` in an option table. The
//! tokenizer, writer and document code are untouched.

use std::any::Any;
use std::fmt::{self, Debug, Formatter};

use crate::error::{CompoundError, ValueError};
use crate::token::{is_sentinel, tokenize, NONE};

mod param_list;
mod pairs;
mod records;

pub use pairs::StringDoubleList;
pub use param_list::ParamList;
pub use records::{InletList, InletRecord, PeriodicList, PeriodicRecord};

/// Trait for plugin-defined option values
///
/// `Default` must produce the zero value, the one written as `NONE`.
///
/// # Contract
/// - `render()` returns `NONE` for the zero value, else [`render_tokens`]
/// - `parse(["NONE"])` returns the zero value, else [`parse_tokens`]
/// - `parse(tokenize(render(v))) == v` for every value built by `parse`
///
/// [`render_tokens`]: CompoundValue::render_tokens
/// [`parse_tokens`]: CompoundValue::parse_tokens
pub trait CompoundValue: Any + Clone + PartialEq + Debug + Default + Send + Sync {
    /// True for the zero value
    fn is_zero(&self) -> bool;

    /// Canonical text of a non-zero value
    fn render_tokens(&self) -> String;

    /// Build a value from a token list that is not the sentinel
    ///
    /// # Errors
    /// Returns error if the tokens do not fit the type's shape
    fn parse_tokens(tokens: &[String]) -> Result<Self, CompoundError>;

    /// Canonical text, `NONE` for the zero value
    fn render(&self) -> String {
        if self.is_zero() {
            NONE.to_string()
        } else {
            self.render_tokens()
        }
    }

    /// Build a value from raw tokens, honouring the `NONE` sentinel
    ///
    /// # Errors
    /// Returns error if the tokens do not fit the type's shape
    fn parse(tokens: &[String]) -> Result<Self, CompoundError> {
        if is_sentinel(tokens) {
            Ok(Self::default())
        } else {
            Self::parse_tokens(tokens)
        }
    }
}

/// Type-erased compound value for storage in documents
pub trait DynCompound: Any + Debug + Send + Sync {
    /// Canonical text
    fn render(&self) -> String;

    /// True for the zero value
    fn is_zero(&self) -> bool;

    /// Clone behind the erasure
    fn clone_box(&self) -> Box<dyn DynCompound>;

    /// Structural equality with another erased value
    fn eq_dyn(&self, other: &dyn DynCompound) -> bool;

    /// Access to the concrete type
    fn as_any(&self) -> &dyn Any;
}

impl<T: CompoundValue> DynCompound for T {
    fn render(&self) -> String {
        CompoundValue::render(self)
    }

    fn is_zero(&self) -> bool {
        CompoundValue::is_zero(self)
    }

    fn clone_box(&self) -> Box<dyn DynCompound> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn DynCompound) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Owned, erased compound value
pub struct CompoundBox(Box<dyn DynCompound>);

impl CompoundBox {
    /// Erase a concrete plugin value
    #[inline]
    #[must_use]
    pub fn new<T: CompoundValue>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Canonical text
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.0.render()
    }

    /// True for the zero value
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow as the concrete plugin type
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: CompoundValue>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// True if the erased value is a `T`
    #[inline]
    #[must_use]
    pub fn is<T: CompoundValue>(&self) -> bool {
        self.0.as_any().is::<T>()
    }
}

impl Clone for CompoundBox {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl PartialEq for CompoundBox {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl Debug for CompoundBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse/zero/accepts capability of one compound type, bound to a tag
///
/// Built once per option table entry with [`CompoundPlugin::new`]; copying it
/// copies three function pointers and the tag.
#[derive(Clone, Copy)]
pub struct CompoundPlugin {
    tag: &'static str,
    parse: fn(&[String]) -> Result<CompoundBox, CompoundError>,
    zero: fn() -> CompoundBox,
    accepts: fn(&CompoundBox) -> bool,
}

impl CompoundPlugin {
    /// Capability for plugin type `T` under `tag`
    #[must_use]
    pub const fn new<T: CompoundValue>(tag: &'static str) -> Self {
        Self {
            tag,
            parse: parse_erased::<T>,
            zero: zero_erased::<T>,
            accepts: accepts_erased::<T>,
        }
    }

    /// Type tag shown in the `Type:` comment of written documents
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Parse raw tokens into an erased value
    ///
    /// # Errors
    /// Returns error if the tokens do not fit the plugin's shape
    #[inline]
    pub fn parse(&self, tokens: &[String]) -> Result<CompoundBox, CompoundError> {
        (self.parse)(tokens)
    }

    /// Zero value of the plugin type
    #[inline]
    #[must_use]
    pub fn zero(&self) -> CompoundBox {
        (self.zero)()
    }

    /// True if `value` is of this plugin's type
    #[inline]
    #[must_use]
    pub fn accepts(&self, value: &CompoundBox) -> bool {
        (self.accepts)(value)
    }

    /// Check that `value` reads back unchanged from its own rendering
    ///
    /// # Errors
    /// Returns [`ValueError::Unrepresentable`] if the round trip changes it, or
    /// if the text holds an `=` that would break the `KEY= value` line
    pub fn check_representable(&self, value: &CompoundBox) -> Result<(), ValueError> {
        let text = value.render();
        if text.contains('=') {
            return Err(ValueError::Unrepresentable(text));
        }
        match self.parse(&tokenize(&text)) {
            Ok(back) if back == *value => Ok(()),
            _ => Err(ValueError::Unrepresentable(text)),
        }
    }
}

impl PartialEq for CompoundPlugin {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for CompoundPlugin {}

impl Debug for CompoundPlugin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompoundPlugin").field(&self.tag).finish()
    }
}

fn parse_erased<T: CompoundValue>(tokens: &[String]) -> Result<CompoundBox, CompoundError> {
    T::parse(tokens).map(CompoundBox::new)
}

fn zero_erased<T: CompoundValue>() -> CompoundBox {
    CompoundBox::new(T::default())
}

fn accepts_erased<T: CompoundValue>(value: &CompoundBox) -> bool {
    value.is::<T>()
}

/// Parse a numeric slot of a compound value
pub(crate) fn number(tag: &'static str, token: &str) -> Result<f64, CompoundError> {
    token.parse().map_err(|_| CompoundError::NumericSlot {
        tag,
        token: token.to_string(),
    })
}
