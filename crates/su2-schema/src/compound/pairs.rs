//! Paired string/float list

use super::{number, CompoundValue};
use crate::error::CompoundError;
use crate::value::format_float;

const TAG: &str = "STRING_DOUBLE_LIST";

/// Ordered list of `(name, value)` pairs, written `( a, 1.5, b, 2 )`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringDoubleList {
    entries: Vec<(String, f64)>,
}

impl StringDoubleList {
    /// Create from pairs
    #[must_use]
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// All pairs in order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Value of the first pair named `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| *value)
    }

    /// Append a pair
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.entries.push((name.into(), value));
    }

    /// Number of pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no pairs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CompoundValue for StringDoubleList {
    fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    fn render_tokens(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{name}, {}", format_float(*value)))
            .collect();
        format!("( {} )", parts.join(", "))
    }

    fn parse_tokens(tokens: &[String]) -> Result<Self, CompoundError> {
        if tokens.len() % 2 != 0 {
            return Err(CompoundError::RecordWidth {
                tag: TAG,
                width: 2,
                found: tokens.len(),
            });
        }
        let entries = tokens
            .chunks_exact(2)
            .map(|pair| number(TAG, &pair[1]).map(|value| (pair[0].clone(), value)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }
}
