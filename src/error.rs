use thiserror::Error;

/// Errors raised while reading, writing, or converting persisted documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to parse project JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not access project file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom document data: {0}")]
    ConversionError(String),
}

/// Errors raised by the external data source pipeline.
///
/// Only [`SourceError::PublishedLink`] ever reaches the caller of
/// `DataSource::fetch_data`; every other variant is absorbed into the
/// fallback dataset and reported as a notice.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(
        "'{0}' is a published (/d/e/) link, which cannot be read. Use the edit link of the spreadsheet instead (docs.google.com/spreadsheets/d/1Bxi.../edit)"
    )]
    PublishedLink(String),

    #[error("Request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not initialize the HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Response of {len} bytes is too short to contain the sheet payload")]
    Envelope { len: usize },

    #[error("Failed to parse sheet payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
