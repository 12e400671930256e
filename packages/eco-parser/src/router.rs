//! Document routing: identifier classification and hierarchy walks.
//!
//! Each document kind has a fixed chain of elements from the document root
//! down to its content root. The chain is walked with
//! [`find_exactly_one`], so a missing or duplicated step fails with the
//! offending tag and count.

use roxmltree::{Document, Node};

use crate::config::{ARTICLE_URL_PATTERN, SCHEDULE_URL_PATTERN};
use crate::error::{EcoParserError, Result};
use crate::xml::{find_exactly_one, leg, QualifiedTag};

/// Path from the `Legislation` root to a schedule's content.
const SCHEDULE_PATH: [QualifiedTag<'static>; 4] = [
    leg("Secondary"),
    leg("Schedules"),
    leg("Schedule"),
    leg("ScheduleBody"),
];

/// Path from the `Legislation` root to an article's content.
const ARTICLE_PATH: [QualifiedTag<'static>; 2] = [leg("Secondary"), leg("Body")];

/// The kinds of legislation document that can be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Schedule,
    Article,
}

impl DocumentKind {
    /// Classify a document identifier.
    ///
    /// The schedule pattern is tried first, so an identifier matching both
    /// patterns is a schedule.
    ///
    /// # Examples
    /// ```
    /// use eco_parser::router::DocumentKind;
    ///
    /// let kind = DocumentKind::classify(
    ///     "http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml",
    /// );
    /// assert_eq!(kind.unwrap(), DocumentKind::Schedule);
    /// assert!(DocumentKind::classify("foo.bar/baz").is_err());
    /// ```
    pub fn classify(identifier: &str) -> Result<Self> {
        if SCHEDULE_URL_PATTERN.is_match(identifier) {
            Ok(Self::Schedule)
        } else if ARTICLE_URL_PATTERN.is_match(identifier) {
            Ok(Self::Article)
        } else {
            Err(EcoParserError::UnroutableDocument(identifier.to_string()))
        }
    }

    /// Element chain from the document root to the content root.
    #[must_use]
    pub fn content_path(&self) -> &'static [QualifiedTag<'static>] {
        match self {
            Self::Schedule => &SCHEDULE_PATH,
            Self::Article => &ARTICLE_PATH,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Article => "article",
        }
    }
}

/// Walk a fixed element chain, one exact match per step.
pub fn walk<'a, 'input>(
    start: Node<'a, 'input>,
    path: &[QualifiedTag<'_>],
) -> Result<Node<'a, 'input>> {
    path.iter()
        .try_fold(start, |node, tag| find_exactly_one(node, *tag))
}

/// Find the content root (`ScheduleBody` or `Body`) of a parsed document.
pub fn content_root<'a, 'input>(
    doc: &'a Document<'input>,
    kind: DocumentKind,
) -> Result<Node<'a, 'input>> {
    let root = walk(doc.root_element(), kind.content_path())?;
    tracing::debug!(
        kind = kind.as_str(),
        content = root.tag_name().name(),
        "Found content root"
    );
    Ok(root)
}
