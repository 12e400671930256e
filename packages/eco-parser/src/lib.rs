//! eco-parser - Parse ward lists from Electoral Change Orders.
//!
//! This crate extracts ward names and councillor counts from UK statutory
//! instruments published as XML on legislation.gov.uk. Schedules usually
//! carry an XHTML table; articles and some schedules list wards as narrative
//! text. Both come out as a flat list of [`Row`]s.
//!
//! # Example
//!
//! ```
//! use eco_parser::extract;
//!
//! let xml = r#"<Legislation xmlns="http://www.legislation.gov.uk/namespaces/legislation">
//!   <Secondary><Body><P1><Text>Warnell;</Text></P1></Body></Secondary>
//! </Legislation>"#;
//! let url = "http://www.legislation.gov.uk/uksi/2017/1270/article/3/made/data.xml";
//!
//! let rows = extract(url, xml.as_bytes()).unwrap();
//! assert_eq!(rows[0].cells(), &["Warnell".to_string()]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, URL patterns and identifier helpers
//! - [`error`]: Error types and Result alias
//! - [`types`]: The `Row` type
//! - [`xml`]: Namespaces, element lookup, text normalization and the nesting check
//! - [`parsers`]: Table and body strategies plus strategy selection
//! - [`router`]: Schedule/article classification and hierarchy walks
//! - [`extractor`]: `extract`, `resolve_identifier` and `download_rows` entry points
//! - [`http`]: HTTP client for downloading documents
//! - [`output`]: CSV and JSON row writers
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod http;
pub mod output;
pub mod parsers;
pub mod router;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extractor::{download_rows, extract};

// Re-export commonly used items
pub use error::{EcoParserError, Result};
pub use router::DocumentKind;
pub use types::Row;
