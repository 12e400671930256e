//! Content parsers turning a content-bearing element into rows.
//!
//! Two strategies exist: [`TableParser`] reads an embedded XHTML table and
//! [`BodyParser`] reads loose narrative `Text` units. [`select_parser`]
//! decides which one applies to a given content root.

mod body;
mod selector;
mod table;

pub use body::{strip_trailing_punctuation, BodyParser};
pub use selector::{select_parser, ContentParser, ParserKind};
pub use table::TableParser;

use crate::error::Result;
use crate::types::Row;

/// Trait for content parsers.
///
/// A parser is bound to one element when it is created and turns it into
/// an ordered sequence of rows.
pub trait ElementParser {
    /// Parse the bound element.
    fn parse(&self) -> Result<Vec<Row>>;
}
