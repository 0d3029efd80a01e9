//! Category order table
//!
//! Options are grouped by category when written. The order of categories is
//! fixed by the table; an option naming a category outside the table makes
//! the registry inconsistent.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{SchemaError, SchemaResult};

/// A named group of options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Name printed in the category banner
    pub name: &'static str,
    /// One-line description printed under the banner, may be empty
    pub description: &'static str,
}

impl Category {
    /// Create a category
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Total order over category names
#[derive(Debug, Clone)]
pub struct CategoryOrder {
    categories: Vec<Category>,
    ranks: HashMap<&'static str, usize>,
}

impl CategoryOrder {
    /// Build the order from a table, first entry ranking lowest
    ///
    /// # Errors
    /// Returns [`SchemaError::DuplicateCategory`] if a name repeats, or
    /// [`SchemaError::MultilineCategory`] if a name or description holds a
    /// line break
    pub fn new(table: &[Category]) -> SchemaResult<Self> {
        let mut ranks = HashMap::with_capacity(table.len());
        for (rank, category) in table.iter().enumerate() {
            if has_line_break(category.name) || has_line_break(category.description) {
                return Err(SchemaError::MultilineCategory(category.name));
            }
            if ranks.insert(category.name, rank).is_some() {
                return Err(SchemaError::DuplicateCategory(category.name));
            }
        }
        Ok(Self {
            categories: table.to_vec(),
            ranks,
        })
    }

    /// Rank of a category name
    #[inline]
    #[must_use]
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Category at a rank
    #[inline]
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&Category> {
        self.categories.get(rank)
    }

    /// Categories in order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True if the table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// True if `text` would not fit on one comment line
pub(crate) fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}
