use crate::data::DEMO_SHEET_ID;
use crate::error::SourceError;
use regex::Regex;
use std::sync::LazyLock;

static SHEET_ID_IN_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").ok());

const SPREADSHEET_HOST: &str = "docs.google.com";
const PUBLISHED_MARKER: &str = "/d/e/";

/// What a configured source identifier points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRef {
    /// The built-in demo catalogue.
    Demo,
    /// A bare remote sheet id.
    Remote(String),
}

impl SheetRef {
    pub fn id(&self) -> &str {
        match self {
            SheetRef::Demo => DEMO_SHEET_ID,
            SheetRef::Remote(id) => id,
        }
    }
}

/// Turns a configured identifier into a [`SheetRef`].
///
/// Returns `Ok(None)` for an empty identifier. A full spreadsheet URL is
/// reduced to its bare id; a published (`/d/e/`) URL is rejected because the
/// query endpoint cannot read it.
pub fn parse_sheet_ref(raw: &str) -> Result<Option<SheetRef>, SourceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let id = if raw.contains(SPREADSHEET_HOST) {
        if raw.contains(PUBLISHED_MARKER) {
            return Err(SourceError::PublishedLink(raw.to_string()));
        }
        SHEET_ID_IN_URL
            .as_ref()
            .and_then(|re| re.captures(raw))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(raw)
    } else {
        raw
    };

    if id == DEMO_SHEET_ID {
        Ok(Some(SheetRef::Demo))
    } else {
        Ok(Some(SheetRef::Remote(id.to_string())))
    }
}
