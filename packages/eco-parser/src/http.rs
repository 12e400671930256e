//! HTTP client wrapper for downloading legislation documents.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, MAX_RESPONSE_SIZE, MAX_RETRIES, RETRY_BASE_DELAY_MS};
use crate::error::{EcoParserError, Result};

/// User agent string identifying this parser.
const USER_AGENT: &str = concat!("eco-parser/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a document with retry logic and the default size limit.
///
/// See [`fetch_document_with_limit`].
pub fn fetch_document(client: &Client, url: &str) -> Result<Vec<u8>> {
    fetch_document_with_limit(client, url, MAX_RESPONSE_SIZE)
}

/// Download a document with retry logic.
///
/// Uses exponential backoff for transient failures (connection errors,
/// timeouts, 5xx responses). Client errors (4xx) fail immediately.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Largest accepted body, in bytes
///
/// # Returns
/// Raw bytes of the response body
pub fn fetch_document_with_limit(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response
                    .error_for_status()
                    .map_err(|source| fetch_error(url, source))?;

                if let Some(size) = response.content_length() {
                    if size > max_size {
                        return Err(EcoParserError::ResponseTooLarge {
                            url: url.to_string(),
                            size,
                            limit: max_size,
                        });
                    }
                }

                let bytes = response
                    .bytes()
                    .map_err(|source| fetch_error(url, source))?;
                if bytes.len() as u64 > max_size {
                    return Err(EcoParserError::ResponseTooLarge {
                        url: url.to_string(),
                        size: bytes.len() as u64,
                        limit: max_size,
                    });
                }

                tracing::debug!(url, bytes = bytes.len(), "Downloaded document");
                return Ok(bytes.to_vec());
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                // Other errors (like an invalid URL) won't improve on retry
                return Err(fetch_error(url, e));
            }
        }
    }

    Err(EcoParserError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

fn fetch_error(url: &str, source: reqwest::Error) -> EcoParserError {
    EcoParserError::Fetch {
        url: url.to_string(),
        source,
    }
}
