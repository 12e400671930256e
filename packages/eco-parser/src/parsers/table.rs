//! Tabular strategy: reads the header and body of an XHTML table.

use roxmltree::Node;

use super::ElementParser;
use crate::error::{EcoParserError, Result};
use crate::types::Row;
use crate::xml::{element_children, find_exactly_one, has_tag, normalize_text, xhtml};

/// Parser bound to an `xhtml:table` element.
#[derive(Debug, Clone, Copy)]
pub struct TableParser<'a, 'input> {
    table: Node<'a, 'input>,
}

impl<'a, 'input> TableParser<'a, 'input> {
    #[must_use]
    pub fn new(table: Node<'a, 'input>) -> Self {
        Self { table }
    }

    /// The table element this parser reads.
    #[must_use]
    pub fn element(&self) -> Node<'a, 'input> {
        self.table
    }

    /// Read the column labels from the first `tr` of `thead`.
    pub fn parse_head(&self) -> Result<Row> {
        let thead = find_exactly_one(self.table, xhtml("thead"))?;
        let first_row = element_children(thead)
            .find(|child| has_tag(*child, xhtml("tr")))
            .ok_or_else(|| EcoParserError::AmbiguousOrMissingElement {
                tag: xhtml("tr").to_string(),
                found: 0,
            })?;

        Ok(element_children(first_row).map(normalize_text).collect())
    }

    /// Read every data row of `tbody`.
    ///
    /// Rows containing any `th` cell repeat the header and are skipped.
    /// Each row keeps its own cell count.
    pub fn parse_body(&self) -> Result<Vec<Row>> {
        let tbody = find_exactly_one(self.table, xhtml("tbody"))?;

        Ok(element_children(tbody)
            .filter(|row| !is_header_row(*row))
            .map(|row| element_children(row).map(normalize_text).collect::<Row>())
            .collect())
    }
}

impl ElementParser for TableParser<'_, '_> {
    fn parse(&self) -> Result<Vec<Row>> {
        let header = self.parse_head()?;
        let body = self.parse_body()?;

        let mismatched = body.iter().filter(|row| row.arity() != header.arity()).count();
        if mismatched > 0 {
            tracing::debug!(
                header_arity = header.arity(),
                mismatched,
                "Table rows with a cell count different from the header"
            );
        }

        let mut rows = Vec::with_capacity(body.len() + 1);
        rows.push(header);
        rows.extend(body);
        Ok(rows)
    }
}

/// Check whether a table row is styled as a header row.
fn is_header_row(row: Node<'_, '_>) -> bool {
    element_children(row).any(|cell| has_tag(cell, xhtml("th")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    fn table_xml(inner: &str) -> String {
        format!(
            r#"<xhtml:table xmlns="http://www.legislation.gov.uk/namespaces/legislation" xmlns:xhtml="http://www.w3.org/1999/xhtml">{inner}</xhtml:table>"#
        )
    }

    const HEAD: &str = "<xhtml:thead><xhtml:tr>\
        <xhtml:th>(1) Name of <Emphasis>borough</Emphasis> ward</xhtml:th>\
        <xhtml:th>(2) Number of councillors</xhtml:th>\
        </xhtml:tr></xhtml:thead>";

    #[test]
    fn test_parse_table() {
        let xml = table_xml(&format!(
            "{HEAD}<xhtml:tbody>\
             <xhtml:tr><xhtml:td>Warnell</xhtml:td><xhtml:td>1</xhtml:td></xhtml:tr>\
             <xhtml:tr><xhtml:td><Text>Westward\n Ho!</Text></xhtml:td><xhtml:td> 2 </xhtml:td></xhtml:tr>\
             </xhtml:tbody>"
        ));
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(
            rows,
            vec![
                Row::from(["(1) Name of borough ward", "(2) Number of councillors"]),
                Row::from(["Warnell", "1"]),
                Row::from(["Westward Ho!", "2"]),
            ]
        );
    }

    #[test]
    fn test_skips_header_rows_in_body() {
        let xml = table_xml(&format!(
            "{HEAD}<xhtml:tbody>\
             <xhtml:tr><xhtml:th>(1) Name of borough ward</xhtml:th><xhtml:th>(2) Number of councillors</xhtml:th></xhtml:tr>\
             <xhtml:tr><xhtml:td>Warnell</xhtml:td><xhtml:td>1</xhtml:td></xhtml:tr>\
             </xhtml:tbody>"
        ));
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Row::from(["Warnell", "1"]));
    }

    #[test]
    fn test_mixed_header_cell_marks_row_as_header() {
        let xml = table_xml(&format!(
            "{HEAD}<xhtml:tbody>\
             <xhtml:tr><xhtml:th>Ward</xhtml:th><xhtml:td>1</xhtml:td></xhtml:tr>\
             </xhtml:tbody>"
        ));
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_arity_mismatch_is_preserved() {
        let xml = table_xml(&format!(
            "{HEAD}<xhtml:tbody>\
             <xhtml:tr><xhtml:td>Warnell</xhtml:td><xhtml:td>1</xhtml:td><xhtml:td>extra</xhtml:td></xhtml:tr>\
             <xhtml:tr><xhtml:td>St John’s</xhtml:td></xhtml:tr>\
             </xhtml:tbody>"
        ));
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows[0].arity(), 2);
        assert_eq!(rows[1], Row::from(["Warnell", "1", "extra"]));
        assert_eq!(rows[2], Row::from(["St John’s"]));
    }

    #[test]
    fn test_empty_cells_are_kept() {
        let xml = table_xml(&format!(
            "{HEAD}<xhtml:tbody>\
             <xhtml:tr><xhtml:td>Warnell</xhtml:td><xhtml:td/></xhtml:tr>\
             </xhtml:tbody>"
        ));
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows[1], Row::from(["Warnell", ""]));
    }

    #[test]
    fn test_missing_thead() {
        let xml = table_xml("<xhtml:tbody><xhtml:tr><xhtml:td>Warnell</xhtml:td></xhtml:tr></xhtml:tbody>");
        let doc = Document::parse(&xml).unwrap();
        let err = TableParser::new(doc.root_element()).parse().unwrap_err();

        assert!(err.is_missing());
        assert_eq!(err.to_string(), "Expected exactly one <xhtml:thead> element, found 0");
    }

    #[test]
    fn test_duplicate_tbody() {
        let xml = table_xml(&format!("{HEAD}<xhtml:tbody/><xhtml:tbody/>"));
        let doc = Document::parse(&xml).unwrap();
        let err = TableParser::new(doc.root_element()).parse().unwrap_err();

        assert!(matches!(
            err,
            EcoParserError::AmbiguousOrMissingElement { ref tag, found: 2 } if tag == "xhtml:tbody"
        ));
    }

    #[test]
    fn test_thead_without_row() {
        let xml = table_xml("<xhtml:thead/><xhtml:tbody/>");
        let doc = Document::parse(&xml).unwrap();
        let err = TableParser::new(doc.root_element()).parse_head().unwrap_err();

        assert_eq!(err.to_string(), "Expected exactly one <xhtml:tr> element, found 0");
    }

    #[test]
    fn test_header_skips_non_row_children() {
        let xml = table_xml(
            "<xhtml:thead>\
             <Footnote><Text>See note</Text></Footnote>\
             <xhtml:tr><xhtml:th>Ward</xhtml:th><xhtml:th>Councillors</xhtml:th></xhtml:tr>\
             </xhtml:thead><xhtml:tbody/>",
        );
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows, vec![Row::from(["Ward", "Councillors"])]);
    }

    #[test]
    fn test_thead_with_only_non_row_children() {
        let xml = table_xml("<xhtml:thead><Footnote/></xhtml:thead><xhtml:tbody/>");
        let doc = Document::parse(&xml).unwrap();
        let err = TableParser::new(doc.root_element()).parse_head().unwrap_err();

        assert!(matches!(
            err,
            EcoParserError::AmbiguousOrMissingElement { ref tag, found: 0 } if tag == "xhtml:tr"
        ));
    }

    #[test]
    fn test_header_uses_first_row_only() {
        let xml = table_xml(
            "<xhtml:thead>\
             <xhtml:tr><xhtml:th>Ward</xhtml:th><xhtml:th>Councillors</xhtml:th></xhtml:tr>\
             <xhtml:tr><xhtml:th>(1)</xhtml:th><xhtml:th>(2)</xhtml:th></xhtml:tr>\
             </xhtml:thead><xhtml:tbody/>",
        );
        let doc = Document::parse(&xml).unwrap();
        let rows = TableParser::new(doc.root_element()).parse().unwrap();

        assert_eq!(rows, vec![Row::from(["Ward", "Councillors"])]);
    }
}
