//! Configuration constants and identifier helpers for the parser.

use regex::Regex;
use std::sync::LazyLock;

/// Base URL for the legislation.gov.uk repository.
pub const LEGISLATION_BASE_URL: &str = "https://www.legislation.gov.uk";

/// Default namespace of legislation.gov.uk documents.
pub const LEGISLATION_NAMESPACE: &str = "http://www.legislation.gov.uk/namespaces/legislation";

/// Namespace of the XHTML tables embedded in `Tabular` elements.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP response size in bytes (100 MB).
///
/// Schedules are a few hundred kilobytes at most; anything near this size is
/// not a ward list.
pub const MAX_RESPONSE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum number of attempts for transient HTTP failures.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Deepest element nesting accepted before a document is parsed.
///
/// Ward lists sit around fifteen levels down; the tree parser recurses per
/// level and runs out of stack a few hundred levels deep in debug builds.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Document URLs pointing at a schedule, e.g.
/// `http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static SCHEDULE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?legislation\.gov\.uk/.+/schedule/.+/data\.xml")
        .expect("valid regex")
});

/// Document URLs pointing at an article, e.g.
/// `http://www.legislation.gov.uk/uksi/2017/1270/article/3/made/data.xml`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static ARTICLE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?legislation\.gov\.uk/.+/article/.+/data\.xml")
        .expect("valid regex")
});

/// Build the `data.xml` URL for a document identifier.
///
/// Full `http(s)://` URLs are returned unchanged. Anything else is treated
/// as a path on legislation.gov.uk, with or without a trailing `data.xml`.
///
/// # Examples
/// ```
/// use eco_parser::config::document_url;
///
/// assert_eq!(
///     document_url("uksi/2017/1067/schedule/1/made"),
///     "https://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml"
/// );
/// assert_eq!(
///     document_url("http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml"),
///     "http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml"
/// );
/// ```
pub fn document_url(identifier: &str) -> String {
    let identifier = identifier.trim();
    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        return identifier.to_string();
    }

    let path = identifier.trim_matches('/');
    let path = path.strip_suffix("data.xml").unwrap_or(path).trim_end_matches('/');
    format!("{LEGISLATION_BASE_URL}/{path}/data.xml")
}
