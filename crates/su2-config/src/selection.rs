//! Field selection for writing

use std::collections::BTreeSet;

use su2_schema::FieldId;

/// Fields that are written even when they hold their default value
///
/// [`SelectionSet::All`] prints every option. A field set prints the listed
/// options unconditionally and every other option only if it differs from
/// its default, so an empty set writes just the changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSet {
    /// Print every option
    All,
    /// Print these options plus anything non-default
    Fields(BTreeSet<FieldId>),
}

impl SelectionSet {
    /// Empty selection: only non-default values are written
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::Fields(BTreeSet::new())
    }

    /// Select the given fields
    pub fn of<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldId>,
    {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }

    /// Add a field; no effect on [`SelectionSet::All`]
    pub fn insert(&mut self, field: impl Into<FieldId>) {
        if let Self::Fields(fields) = self {
            fields.insert(field.into());
        }
    }

    /// True if the field is always written
    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        match self {
            Self::All => true,
            Self::Fields(fields) => fields.contains(&field),
        }
    }

    /// True for the universal marker
    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Number of explicitly listed fields, `None` for [`SelectionSet::All`]
    #[must_use]
    pub fn listed_count(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Fields(fields) => Some(fields.len()),
        }
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::none()
    }
}

impl<F: Into<FieldId>> FromIterator<F> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::of(iter)
    }
}
