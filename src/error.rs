use thiserror::Error;

/// Errors that can occur while fetching a page or extracting a recipe from it.
///
/// Extraction-level irregularities (malformed JSON-LD blocks, missing fields,
/// unexpected shapes) never show up here; the extractors absorb them locally
/// and the worst extraction outcome is `NotFound`.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither extractor located usable recipe data on the page
    #[error("No recipe data found on this page")]
    NotFound,

    /// The URL was malformed or used an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote server answered with a non-success status
    #[error("Failed to fetch page (HTTP {0})")]
    HttpStatus(u16),

    /// Failed to fetch the page over HTTP
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
