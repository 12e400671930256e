//! Error types for the parser.
//!
//! A single `EcoParserError` covers the extraction core (element lookup and
//! routing) as well as the fetch and export collaborators around it.

use thiserror::Error;

/// Main error type for the eco-parser library.
#[derive(Debug, Error)]
pub enum EcoParserError {
    /// A single-match lookup found zero or several matching elements.
    ///
    /// `found == 0` means the element is missing, `found > 1` that it is
    /// ambiguous.
    #[error("Expected exactly one <{tag}> element, found {found}")]
    AmbiguousOrMissingElement { tag: String, found: usize },

    /// The identifier matched neither the schedule nor the article pattern.
    #[error("Could not find a suitable parser for {0}")]
    UnroutableDocument(String),

    /// HTTP client could not be constructed or a request failed outright.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Downloading a document failed.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Transient failures persisted through every retry.
    #[error("Giving up after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The server announced a body larger than we are willing to read.
    #[error("Response from {url} is {size} bytes, limit is {limit}")]
    ResponseTooLarge { url: String, size: u64, limit: u64 },

    /// Document bytes are not UTF-8.
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Elements nest deeper than the configured limit.
    #[error("Document nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Output delimiter is not a single ASCII character.
    #[error("Invalid delimiter '{0}'. Expected a single ASCII character (e.g. ',' or '\\t')")]
    InvalidDelimiter(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcoParserError {
    /// True for an `AmbiguousOrMissingElement` with no matches.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::AmbiguousOrMissingElement { found: 0, .. })
    }

    /// True for an `AmbiguousOrMissingElement` with more than one match.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousOrMissingElement { found, .. } if *found > 1)
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, EcoParserError>;
