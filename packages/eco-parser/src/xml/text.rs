//! Text normalization for element content.

use regex::Regex;
use roxmltree::Node;
use std::sync::LazyLock;

/// Any run of whitespace, including newlines and non-breaking spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse whitespace runs into single spaces and trim both ends.
///
/// # Examples
/// ```
/// use eco_parser::xml::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  (1) Name of\n   borough ward "), "(1) Name of borough ward");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Get the full text content of a node as one normalized string.
///
/// Text from every nested element is concatenated in document order before
/// whitespace is collapsed, so a cell split across inline markup reads as
/// a single string. Comments and processing instructions are ignored.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use eco_parser::xml::normalize_text;
///
/// let xml = "<th>(1) Name of <Emphasis>borough</Emphasis>\n    ward</th>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(normalize_text(doc.root_element()), "(1) Name of borough ward");
/// ```
pub fn normalize_text(node: Node<'_, '_>) -> String {
    let raw: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    normalize_whitespace(&raw)
}
