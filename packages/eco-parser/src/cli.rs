//! Command-line interface for the parser.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{EcoParserError, Result};
use crate::extractor::{download_rows, extract, resolve_identifier};
use crate::output::{parse_delimiter, write_rows, OutputFormat};
use crate::types::Row;

/// Parse ward lists from Electoral Change Orders on legislation.gov.uk.
#[derive(Parser)]
#[command(name = "eco-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract ward rows from a schedule or article and print them.
    Extract {
        /// URL to grab XML from, e.g.
        /// http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml
        /// (a bare path such as uksi/2017/1067/schedule/1/made also works)
        url: String,

        /// Read the XML from a local file instead of downloading it
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Field delimiter for CSV output (use '\t' for tabs)
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            url,
            file,
            format,
            delimiter,
            output,
        } => extract_command(
            &url,
            file.as_deref(),
            format,
            &delimiter,
            output.as_deref(),
        ),
    }
}

/// Execute the extract command.
fn extract_command(
    url: &str,
    file: Option<&Path>,
    format: OutputFormat,
    delimiter: &str,
    output: Option<&Path>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    let delimiter = parse_delimiter(delimiter)?;
    let document = resolve_identifier(url)?;

    let rows = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading document from file");
            extract(&document, &std::fs::read(path)?)?
        }
        None => download_with_spinner(url, &document)?,
    };

    // Rows are only written once extraction has fully succeeded
    match output {
        Some(path) => write_rows(BufWriter::new(File::create(path)?), &rows, format, delimiter),
        None => write_rows(io::stdout().lock(), &rows, format, delimiter),
    }
}

/// Fetch and extract, showing a spinner on stderr while downloading.
fn download_with_spinner(identifier: &str, url: &str) -> Result<Vec<Row>> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Downloading {url}"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = download_rows(identifier);

    pb.finish_and_clear();
    result
}

/// Print an error to stderr in the CLI's style.
pub fn report_error(error: &EcoParserError) {
    eprintln!("{} {error}", console::style("Error:").red().bold());
}
