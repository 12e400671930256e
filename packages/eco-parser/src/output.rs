//! Row serialization for export.

use std::io::Write;

use clap::ValueEnum;

use crate::error::{EcoParserError, Result};
use crate::types::Row;

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Delimited text, one row per line
    #[default]
    Csv,
    /// A JSON array of string arrays
    Json,
}

/// Parse a delimiter argument into a single byte.
///
/// Accepts any single ASCII character, plus the escape `\t` for tabs.
///
/// # Examples
/// ```
/// use eco_parser::output::parse_delimiter;
///
/// assert_eq!(parse_delimiter(",").unwrap(), b',');
/// assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
/// assert!(parse_delimiter(";;").is_err());
/// ```
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(EcoParserError::InvalidDelimiter(value.to_string())),
        },
    }
}

/// Write rows to `writer` in the requested format.
///
/// CSV output allows rows of different lengths so table rows whose cell
/// count differs from the header are written as they are.
pub fn write_rows<W: Write>(
    mut writer: W,
    rows: &[Row],
    format: OutputFormat,
    delimiter: u8,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .flexible(true)
                .from_writer(writer);
            for row in rows {
                csv_writer.write_record(row.cells())?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
