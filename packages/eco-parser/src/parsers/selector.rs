//! Strategy selection for a content root.

use roxmltree::Node;

use super::{BodyParser, ElementParser, TableParser};
use crate::error::Result;
use crate::types::Row;
use crate::xml::{find_exactly_one, leg, xhtml};

/// Which strategy a [`ContentParser`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    Table,
    Body,
}

impl ParserKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Body => "body",
        }
    }
}

/// A parser chosen for a content root.
#[derive(Debug, Clone, Copy)]
pub enum ContentParser<'a, 'input> {
    Table(TableParser<'a, 'input>),
    Body(BodyParser<'a, 'input>),
}

impl ContentParser<'_, '_> {
    #[must_use]
    pub fn kind(&self) -> ParserKind {
        match self {
            Self::Table(_) => ParserKind::Table,
            Self::Body(_) => ParserKind::Body,
        }
    }
}

impl ElementParser for ContentParser<'_, '_> {
    fn parse(&self) -> Result<Vec<Row>> {
        match self {
            Self::Table(parser) => parser.parse(),
            Self::Body(parser) => parser.parse(),
        }
    }
}

/// Choose a parser for `content`.
///
/// Uses the table strategy when `content` has exactly one `Tabular` child
/// holding exactly one `xhtml:table`. Any other shape, whether missing or
/// duplicated, falls back to the body strategy over `content` itself.
pub fn select_parser<'a, 'input>(content: Node<'a, 'input>) -> ContentParser<'a, 'input> {
    match find_table(content) {
        Ok(table) => ContentParser::Table(TableParser::new(table)),
        Err(e) => {
            tracing::debug!(error = %e, "No single table, using body parser");
            ContentParser::Body(BodyParser::new(content))
        }
    }
}

/// Locate `Tabular/xhtml:table`. Only ever fails with
/// `AmbiguousOrMissingElement`.
fn find_table<'a, 'input>(content: Node<'a, 'input>) -> Result<Node<'a, 'input>> {
    let tabular = find_exactly_one(content, leg("Tabular"))?;
    find_exactly_one(tabular, xhtml("table"))
}
