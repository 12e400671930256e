//! Core data types for extracted ward data.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One line of output: the cells of a table row, or a single narrative
/// sentence.
///
/// Serializes as a plain array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    /// Create a row from its cells.
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Create a single-cell row.
    #[must_use]
    pub fn single(cell: impl Into<String>) -> Self {
        Self(vec![cell.into()])
    }

    /// Number of cells in this row.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// The cells of this row.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Row {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(cells: [&str; N]) -> Self {
        Self(cells.iter().map(|c| (*c).to_string()).collect())
    }
}

impl FromIterator<String> for Row {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
