//! Element nesting check run before building a tree.
//!
//! `roxmltree` descends one stack frame per element level while parsing, so
//! a pathologically nested document would exhaust the stack instead of
//! failing. This scan only looks at markup delimiters and keeps the depth in
//! a counter.

use crate::error::{EcoParserError, Result};

/// Fail if elements in `text` nest deeper than `limit`.
///
/// Comments, CDATA sections, processing instructions and declarations are
/// skipped, and `>` inside quoted attribute values does not end a tag.
/// Malformed markup is left for the XML parser to report.
///
/// # Examples
/// ```
/// use eco_parser::xml::check_nesting_depth;
///
/// assert!(check_nesting_depth("<a><b/><c></c></a>", 2).is_ok());
/// assert!(check_nesting_depth("<a><b><c/></b></a>", 2).is_err());
/// ```
pub fn check_nesting_depth(text: &str, limit: usize) -> Result<()> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('<') {
        let start = pos + offset;
        let rest = &text[start..];

        pos = if rest.starts_with("<!--") {
            skip_past(text, start + 4, "-->")
        } else if rest.starts_with("<![CDATA[") {
            skip_past(text, start + 9, "]]>")
        } else if rest.starts_with("<?") {
            skip_past(text, start + 2, "?>")
        } else if rest.starts_with("<!") {
            skip_declaration(bytes, start + 2)
        } else if rest.starts_with("</") {
            depth = depth.saturating_sub(1);
            skip_past(text, start + 2, ">")
        } else {
            let (end, self_closing) = scan_start_tag(bytes, start + 1);
            if !self_closing {
                depth += 1;
                if depth > limit {
                    return Err(EcoParserError::NestingTooDeep { depth, limit });
                }
            }
            end
        };
    }

    Ok(())
}

/// Index just after the next `pattern` at or after `from`, or the end of
/// the text.
fn skip_past(text: &str, from: usize, pattern: &str) -> usize {
    text.get(from..)
        .and_then(|rest| rest.find(pattern))
        .map_or(text.len(), |offset| from + offset + pattern.len())
}

/// Skip a `<!DOCTYPE ...>` style declaration, including an internal subset.
fn skip_declaration(bytes: &[u8], from: usize) -> usize {
    let mut brackets = 0usize;
    let mut quote: Option<u8> = None;

    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'[') => brackets += 1,
            (None, b']') => brackets = brackets.saturating_sub(1),
            (None, b'>') if brackets == 0 => return i + 1,
            _ => {}
        }
    }
    bytes.len()
}

/// Find the end of a start tag and whether it closes itself (`/>`).
///
/// An unterminated tag counts as self-closing so it never adds depth.
fn scan_start_tag(bytes: &[u8], from: usize) -> (usize, bool) {
    let mut quote: Option<u8> = None;

    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return (i + 1, bytes[i - 1] == b'/'),
            _ => {}
        }
    }
    (bytes.len(), true)
}
