//! Extraction entry points that tie routing and parsing together.

use roxmltree::Document;

use crate::config::{document_url, MAX_NESTING_DEPTH};
use crate::error::{EcoParserError, Result};
use crate::http::{create_client, fetch_document};
use crate::parsers::{select_parser, ElementParser};
use crate::router::{content_root, DocumentKind};
use crate::types::Row;
use crate::xml::check_nesting_depth;

/// Extract rows from an already downloaded document.
///
/// `identifier` is only used to decide between the schedule and article
/// layouts; nothing is fetched.
///
/// # Arguments
/// * `identifier` - The document URL (e.g. `.../schedule/1/made/data.xml`)
/// * `raw` - The document bytes, UTF-8 encoded
///
/// # Returns
/// Rows in document order. For tables the first row is the header.
///
/// Documents nesting deeper than [`MAX_NESTING_DEPTH`] are rejected with
/// `NestingTooDeep` before the tree is built.
pub fn extract(identifier: &str, raw: &[u8]) -> Result<Vec<Row>> {
    let kind = DocumentKind::classify(identifier)?;

    let text = std::str::from_utf8(raw)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    check_nesting_depth(text, MAX_NESTING_DEPTH)?;
    let doc = Document::parse(text)?;

    let content = content_root(&doc, kind)?;
    let parser = select_parser(content);
    let rows = parser.parse()?;

    tracing::debug!(
        identifier,
        kind = kind.as_str(),
        parser = parser.kind().as_str(),
        rows = rows.len(),
        "Extracted rows"
    );
    Ok(rows)
}

/// Expand an identifier to its `data.xml` URL and check that it routes.
///
/// An unroutable identifier is reported as given, not as the expanded URL.
///
/// # Examples
/// ```
/// use eco_parser::extractor::resolve_identifier;
///
/// assert_eq!(
///     resolve_identifier("uksi/2017/1067/schedule/1/made").unwrap(),
///     "https://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml"
/// );
/// assert_eq!(
///     resolve_identifier("foo.bar/baz").unwrap_err().to_string(),
///     "Could not find a suitable parser for foo.bar/baz"
/// );
/// ```
pub fn resolve_identifier(identifier: &str) -> Result<String> {
    let url = document_url(identifier);
    match DocumentKind::classify(&url) {
        Ok(_) => Ok(url),
        Err(EcoParserError::UnroutableDocument(_)) => Err(EcoParserError::UnroutableDocument(
            identifier.trim().to_string(),
        )),
        Err(e) => Err(e),
    }
}

/// Download a document and extract its rows.
///
/// # Arguments
/// * `identifier` - A legislation.gov.uk URL or path (e.g.
///   `uksi/2017/1067/schedule/1/made`)
///
/// # Returns
/// Rows in document order
pub fn download_rows(identifier: &str) -> Result<Vec<Row>> {
    // Reject unroutable identifiers before touching the network
    let url = resolve_identifier(identifier)?;

    let client = create_client()?;
    let raw = fetch_document(&client, &url)?;
    extract(&url, &raw)
}
