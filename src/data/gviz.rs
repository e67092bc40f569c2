//! Wire format of the spreadsheet visualization endpoint.
//!
//! The endpoint answers with `/*O_o*/\ngoogle.visualization.Query.setResponse(` + JSON + `);`.
use super::model::Table;
use crate::error::SourceError;
use crate::model::Scalar;
use serde::Deserialize;

/// Length of the non-JSON preamble in front of the payload.
pub const PREAMBLE_LEN: usize = 47;
/// Length of the `);` suffix after the payload.
pub const SUFFIX_LEN: usize = 2;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    cols: Vec<GvizColumn>,
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<serde_json::Value>,
    #[serde(default)]
    f: Option<String>,
}

impl GvizCell {
    /// The raw value when it is truthy, else the formatted value, else empty.
    fn into_scalar(self) -> Scalar {
        let raw = self.v.and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_f64().filter(|f| *f != 0.0).map(Scalar::Number),
            serde_json::Value::String(s) if !s.is_empty() => Some(Scalar::Text(s)),
            serde_json::Value::Bool(true) => Some(Scalar::from("true")),
            _ => None,
        });
        raw.or_else(|| self.f.map(Scalar::Text))
            .unwrap_or_else(|| Scalar::from(""))
    }
}

/// Cuts the fixed preamble and suffix off a raw response body.
pub fn strip_envelope(body: &str) -> Result<&str, SourceError> {
    let len = body.len();
    if len < PREAMBLE_LEN + SUFFIX_LEN {
        return Err(SourceError::Envelope { len });
    }
    body.get(PREAMBLE_LEN..len - SUFFIX_LEN)
        .ok_or(SourceError::Envelope { len })
}

/// Parses a full response body into a table.
pub fn parse_response(body: &str) -> Result<Table, SourceError> {
    let payload = strip_envelope(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    let columns: Vec<String> = response.table.cols.into_iter().map(|c| c.label).collect();
    let cells = response.table.rows.into_iter().map(|row| {
        row.c
            .into_iter()
            .map(|cell| cell.map(GvizCell::into_scalar))
            .collect::<Vec<_>>()
    });

    Ok(Table::from_positional(columns, cells))
}
