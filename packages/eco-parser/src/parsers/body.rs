//! Body strategy: reads narrative `Text` units.

use roxmltree::Node;

use super::ElementParser;
use crate::error::Result;
use crate::types::Row;
use crate::xml::{find_all_recursive, leg, normalize_text};

/// Punctuation trimmed from the end of each narrative sentence.
const TRAILING_PUNCTUATION: [char; 3] = [',', '.', ';'];

/// Parser bound to a narrative content root (`ScheduleBody` or `Body`).
#[derive(Debug, Clone, Copy)]
pub struct BodyParser<'a, 'input> {
    root: Node<'a, 'input>,
}

impl<'a, 'input> BodyParser<'a, 'input> {
    #[must_use]
    pub fn new(root: Node<'a, 'input>) -> Self {
        Self { root }
    }

    /// The content root this parser reads.
    #[must_use]
    pub fn element(&self) -> Node<'a, 'input> {
        self.root
    }
}

impl ElementParser for BodyParser<'_, '_> {
    /// One single-cell row per `Text` element, in document order.
    ///
    /// Blank text units still produce a row containing an empty string.
    fn parse(&self) -> Result<Vec<Row>> {
        let rows: Vec<Row> = find_all_recursive(self.root, leg("Text"))
            .into_iter()
            .map(|unit| Row::single(strip_trailing_punctuation(&normalize_text(unit))))
            .collect();

        tracing::debug!(text_units = rows.len(), "Parsed narrative body");
        Ok(rows)
    }
}

/// Remove a trailing run of `,`, `.` and `;`.
///
/// Whitespace inside the run is removed with it, so `"Warnell ;"` becomes
/// `"Warnell"` rather than keeping a dangling space.
///
/// # Examples
/// ```
/// use eco_parser::parsers::strip_trailing_punctuation;
///
/// assert_eq!(strip_trailing_punctuation("Warnell;"), "Warnell");
/// assert_eq!(strip_trailing_punctuation("St. John’s.;"), "St. John’s");
/// ```
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| TRAILING_PUNCTUATION.contains(&c) || c.is_whitespace())
}
