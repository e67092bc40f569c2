//! External data source adapter.
//!
//! A fetch is split in three steps so the caller never holds the dataset
//! across an await point:
//!
//! 1. [`DataSource::begin_fetch`] resolves the configured identifier, marks
//!    the dataset as loading and hands back a [`FetchRequest`].
//! 2. [`FetchRequest::run`] performs the slow part and always yields a
//!    [`FetchOutcome`]; network and parse failures become the fallback table.
//! 3. [`DataSource::complete_fetch`] swaps the table in.
//!
//! Until step 3 the previous rows stay readable. Overlapping fetches are not
//! fenced: whichever completes last wins.

pub mod config;
pub mod fetcher;
pub mod sheet_ref;

pub use config::*;
pub use fetcher::*;
pub use sheet_ref::*;

use crate::data::{Dataset, Row, Table, demo_table, fallback_table, gviz};
use crate::error::SourceError;
use crate::notice::Notifier;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where the rows of a completed fetch came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOrigin {
    Demo,
    Remote,
    /// The fetch failed and the mock table was substituted.
    Fallback { reason: String },
}

impl FetchOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOrigin::Fallback { .. })
    }
}

/// Result of running a [`FetchRequest`].
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub sheet_id: String,
    pub table: Table,
    pub origin: FetchOrigin,
}

#[derive(Debug, Clone)]
enum FetchTarget {
    Demo { delay: Duration },
    Remote { url: String },
}

/// A fetch that has been started but not yet run.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    sheet_id: String,
    target: FetchTarget,
}

impl FetchRequest {
    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    /// The query URL, or `None` for the demo source.
    pub fn url(&self) -> Option<&str> {
        match &self.target {
            FetchTarget::Demo { .. } => None,
            FetchTarget::Remote { url } => Some(url),
        }
    }

    /// Produces the replacement table. Never fails.
    pub async fn run(self, fetcher: &dyn SheetFetcher) -> FetchOutcome {
        let (table, origin) = match &self.target {
            FetchTarget::Demo { delay } => {
                tokio::time::sleep(*delay).await;
                (demo_table(), FetchOrigin::Demo)
            }
            FetchTarget::Remote { url } => match fetch_table(fetcher, url).await {
                Ok(table) => (table, FetchOrigin::Remote),
                Err(err) => {
                    warn!(
                        sheet_id = %self.sheet_id,
                        error = %err,
                        "sheet fetch failed, using fallback"
                    );
                    (
                        fallback_table(),
                        FetchOrigin::Fallback {
                            reason: err.to_string(),
                        },
                    )
                }
            },
        };

        FetchOutcome {
            sheet_id: self.sheet_id,
            table,
            origin,
        }
    }
}

async fn fetch_table(fetcher: &dyn SheetFetcher, url: &str) -> Result<Table, SourceError> {
    let body = fetcher.fetch(url).await?;
    gviz::parse_response(&body)
}

/// Owns the dataset and keeps it in sync with the configured sheet.
pub struct DataSource {
    config: SourceConfig,
    dataset: Dataset,
    fetcher: Arc<dyn SheetFetcher>,
    notifier: Notifier,
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("config", &self.config)
            .field("dataset", &self.dataset)
            .finish_non_exhaustive()
    }
}

impl DataSource {
    pub fn builder() -> DataSourceBuilder {
        DataSourceBuilder::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn sheet_id(&self) -> &str {
        &self.config.sheet_id
    }

    pub fn is_loading(&self) -> bool {
        self.dataset.is_loading
    }

    /// The fetcher requests should be run against.
    pub fn fetcher(&self) -> Arc<dyn SheetFetcher> {
        Arc::clone(&self.fetcher)
    }

    /// Changes the configured identifier. Does not fetch.
    pub fn set_sheet_id(&mut self, sheet_id: impl Into<String>) {
        self.config.sheet_id = sheet_id.into();
    }

    pub fn set_sheet_name(&mut self, sheet_name: impl Into<String>) {
        self.config.sheet_name = sheet_name.into();
    }

    /// Focuses a row, or clears the focus with `None`.
    pub fn set_selected_row(&mut self, row: Option<Row>) {
        self.dataset.selected_row = row;
    }

    /// Starts a fetch of the configured sheet.
    ///
    /// Returns `Ok(None)` when no sheet is configured. A full spreadsheet URL
    /// is normalized and the bare id is written back to the configuration.
    /// A published link is rejected with an error notice and leaves the
    /// dataset untouched.
    pub fn begin_fetch(&mut self) -> Result<Option<FetchRequest>, SourceError> {
        let sheet = match parse_sheet_ref(&self.config.sheet_id) {
            Ok(Some(sheet)) => sheet,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.notifier.error("Invalid link", err.to_string());
                return Err(err);
            }
        };

        let sheet_id = sheet.id().to_string();
        if sheet_id != self.config.sheet_id {
            debug!(from = %self.config.sheet_id, to = %sheet_id, "normalized sheet id");
            self.config.sheet_id = sheet_id.clone();
        }

        let target = match sheet {
            SheetRef::Demo => FetchTarget::Demo {
                delay: self.config.demo_delay(),
            },
            SheetRef::Remote(id) => FetchTarget::Remote {
                url: self.config.query_url(&id),
            },
        };

        self.dataset.is_loading = true;
        info!(sheet_id = %sheet_id, "fetch started");
        Ok(Some(FetchRequest { sheet_id, target }))
    }

    /// Applies a finished fetch: replaces the table and clears the loading flag.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) {
        if let FetchOrigin::Fallback { reason } = &outcome.origin {
            self.notifier.warn(
                "Data source unavailable",
                format!("Could not load sheet data ({}). Showing mock data instead.", reason),
            );
        }

        info!(
            sheet_id = %outcome.sheet_id,
            origin = ?outcome.origin,
            rows = outcome.table.rows.len(),
            "fetch completed"
        );
        self.dataset.source_id = outcome.sheet_id;
        self.dataset.replace_table(outcome.table);
        self.dataset.is_loading = false;
    }

    /// Runs a whole fetch cycle in place.
    ///
    /// Returns the origin of the new rows, or `None` when no sheet is
    /// configured.
    pub async fn fetch_data(&mut self) -> Result<Option<FetchOrigin>, SourceError> {
        let Some(request) = self.begin_fetch()? else {
            return Ok(None);
        };
        let fetcher = self.fetcher();
        let outcome = request.run(fetcher.as_ref()).await;
        let origin = outcome.origin.clone();
        self.complete_fetch(outcome);
        Ok(Some(origin))
    }
}

/// Builder for [`DataSource`].
#[derive(Default)]
pub struct DataSourceBuilder {
    config: Option<SourceConfig>,
    fetcher: Option<Arc<dyn SheetFetcher>>,
    notifier: Option<Notifier>,
    initial: Option<Table>,
}

impl DataSourceBuilder {
    pub fn config(mut self, config: SourceConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn sheet_id(mut self, sheet_id: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.sheet_id = sheet_id.into();
        self.config = Some(config);
        self
    }

    /// Replaces the HTTP fetcher.
    pub fn fetcher(mut self, fetcher: Arc<dyn SheetFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Rows to show before the first fetch completes.
    pub fn initial_table(mut self, table: Table) -> Self {
        self.initial = Some(table);
        self
    }

    pub fn build(self) -> Result<DataSource, SourceError> {
        let config = self.config.unwrap_or_default();
        let fetcher: Arc<dyn SheetFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(config.timeout())?),
        };
        let dataset = match self.initial {
            Some(table) => Dataset::from_table(config.sheet_id.clone(), table),
            None => Dataset::empty(config.sheet_id.clone()),
        };

        Ok(DataSource {
            config,
            dataset,
            fetcher,
            notifier: self.notifier.unwrap_or_default(),
        })
    }
}
