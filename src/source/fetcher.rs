use crate::error::SourceError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Retrieves the raw body of a sheet query.
///
/// The HTTP implementation is the production path; tests and offline tools
/// plug in their own.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

/// [`SheetFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// A fetcher whose requests give up after `timeout`, or never with `None`.
    pub fn new(timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SourceError::ClientInit)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SheetFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let http_err = |source| SourceError::Http {
            url: url.to_string(),
            source,
        };

        debug!(url, "requesting sheet");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?;

        response.text().await.map_err(http_err)
    }
}
