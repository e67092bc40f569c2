use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// Spreadsheet the builder connects to out of the box.
pub const DEFAULT_SHEET_ID: &str = "1YuwTSEj1jF7_Nv4onJFC02sPdP7ihee_e_8sp20w74A";
pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/spreadsheets/d";

/// Settings of the external data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    /// Bare sheet id, full spreadsheet URL, or `DEMO`.
    pub sheet_id: String,
    /// Tab to read. Sent as the `sheet` query parameter when non-empty.
    pub sheet_name: String,
    /// Base URL the sheet id is appended to.
    pub endpoint: String,
    /// Simulated latency of the `DEMO` source.
    pub demo_delay_ms: u64,
    /// Optional HTTP request timeout. Unset or zero lets a fetch run to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: "Sheet1".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            demo_delay_ms: 1000,
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Default settings pointed at a different sheet.
    pub fn for_sheet(sheet_id: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// The JSON query URL for a bare sheet id.
    pub fn query_url(&self, sheet_id: &str) -> String {
        let base = format!(
            "{}/{}/gviz/tq",
            self.endpoint.trim_end_matches('/'),
            sheet_id
        );
        let mut params = vec![("tqx", "out:json")];
        if !self.sheet_name.is_empty() {
            params.push(("sheet", self.sheet_name.as_str()));
        }
        match reqwest::Url::parse_with_params(&base, &params) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}?tqx=out:json", base),
        }
    }
}
