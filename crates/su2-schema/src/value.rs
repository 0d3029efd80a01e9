//! Typed option values
//!
//! [`Value`] is the in-memory form of one option. Every variant has exactly
//! one canonical text rendering, produced by [`Value::render`], which the
//! parse rules in [`crate::kind`] read back to an equal value.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::compound::CompoundBox;
use crate::token::NONE;

/// Magnitudes at or above this render in exponent form
const EXPONENT_ABOVE: f64 = 1e16;

/// Non-zero magnitudes below this render in exponent form
const EXPONENT_BELOW: f64 = 1e-4;

/// Typed value of a single option
#[derive(Debug, Clone)]
pub enum Value {
    /// `YES` / `NO`
    Bool(bool),
    /// Floating point scalar
    Scalar(f64),
    /// Single bare token
    String(String),
    /// Member of the option's enum domain
    Enum(String),
    /// Sequence of enum domain members
    EnumList(Vec<String>),
    /// Variable or fixed length float sequence
    FloatArray(Vec<f64>),
    /// Variable length string sequence
    StringArray(Vec<String>),
    /// Plugin-defined value
    Compound(CompoundBox),
}

impl Value {
    /// Canonical text of the value
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Bool(true) => "YES".to_string(),
            Self::Bool(false) => "NO".to_string(),
            Self::Scalar(value) => format_float(*value),
            Self::String(text) | Self::Enum(text) => text.clone(),
            Self::EnumList(items) | Self::StringArray(items) => render_list(items),
            Self::FloatArray(items) => {
                let items: Vec<String> = items.iter().copied().map(format_float).collect();
                render_list(&items)
            }
            Self::Compound(value) => value.render(),
        }
    }

    /// Short name of the variant, used in diagnostics
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Scalar(_) => "Scalar",
            Self::String(_) => "String",
            Self::Enum(_) => "Enum",
            Self::EnumList(_) => "EnumList",
            Self::FloatArray(_) => "FloatArray",
            Self::StringArray(_) => "StringArray",
            Self::Compound(_) => "Compound",
        }
    }

    /// Boolean payload, if any
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Scalar payload, if any
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// String or enum payload, if any
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) | Self::Enum(text) => Some(text),
            _ => None,
        }
    }

    /// Float sequence payload, if any
    #[inline]
    #[must_use]
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::FloatArray(items) => Some(items),
            _ => None,
        }
    }

    /// String or enum sequence payload, if any
    #[inline]
    #[must_use]
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::EnumList(items) | Self::StringArray(items) => Some(items),
            _ => None,
        }
    }

    /// Compound payload, if any
    #[inline]
    #[must_use]
    pub fn as_compound(&self) -> Option<&CompoundBox> {
        match self {
            Self::Compound(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Scalar(a), Self::Scalar(b)) => same_float(*a, *b),
            (Self::String(a), Self::String(b)) | (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::EnumList(a), Self::EnumList(b))
            | (Self::StringArray(a), Self::StringArray(b)) => a == b,
            (Self::FloatArray(a), Self::FloatArray(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_float(*x, *y))
            }
            (Self::Compound(a), Self::Compound(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Scalar(value) => serializer.serialize_f64(*value),
            Self::String(text) | Self::Enum(text) => serializer.serialize_str(text),
            Self::EnumList(items) | Self::StringArray(items) => items.serialize(serializer),
            Self::FloatArray(items) => items.serialize(serializer),
            Self::Compound(value) => serializer.serialize_str(&value.render()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Self::FloatArray(items)
    }
}

/// Float equality used for documents: identical bit patterns (so NaN equals
/// itself) or numerically equal
#[inline]
#[must_use]
pub fn same_float(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || a == b
}

/// Canonical float text
///
/// Shortest decimal that parses back to the same `f64`, switching to
/// exponent form for very large or very small magnitudes.
#[must_use]
pub fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite()
        && magnitude != 0.0
        && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude)
    {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Render a token list as `( a, b, c )`, or `NONE` when empty
#[must_use]
pub fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return NONE.to_string();
    }
    format!("( {} )", items.join(", "))
}
