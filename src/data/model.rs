use crate::error::SourceError;
use crate::model::Scalar;
use ahash::{AHashMap, AHashSet};
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};
use std::fs;

/// A dataset row: column label to cell value.
pub type Row = AHashMap<String, Scalar>;

/// A rectangular block of data: ordered column labels and rows keyed by them.
///
/// This is the unit a fetch replaces wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Builds a table by zipping each positional cell list against `columns`.
    ///
    /// A missing or null cell becomes an empty string; cells past the last
    /// column are dropped so no row ever carries an unknown label.
    pub fn from_positional<I>(columns: Vec<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = Vec<Option<Scalar>>>,
    {
        let rows = cells
            .into_iter()
            .map(|cells| {
                columns
                    .iter()
                    .zip_longest(cells)
                    .filter_map(|pair| match pair {
                        EitherOrBoth::Both(label, cell) => {
                            Some((label.clone(), cell.unwrap_or_else(|| Scalar::from(""))))
                        }
                        EitherOrBoth::Left(label) => Some((label.clone(), Scalar::from(""))),
                        EitherOrBoth::Right(_) => None,
                    })
                    .collect::<Row>()
            })
            .collect();
        Self { columns, rows }
    }

    /// Load a table from a JSON file of the shape `{"columns": [...], "rows": [...]}`.
    pub fn from_file(path: &str) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Every row is keyed by exactly the distinct column labels.
    pub fn is_well_formed(&self) -> bool {
        let labels: AHashSet<&str> = self.columns.iter().map(String::as_str).collect();
        self.rows
            .iter()
            .all(|row| row.len() == labels.len() && row.keys().all(|k| labels.contains(k.as_str())))
    }
}

/// The normalized tabular data the bindings read from.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub source_id: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    #[serde(default)]
    pub is_loading: bool,
    /// The row in focus, set when a list item is activated in preview.
    #[serde(default)]
    pub selected_row: Option<Row>,
}

impl Dataset {
    /// An empty dataset tied to a source identifier.
    pub fn empty(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            ..Self::default()
        }
    }

    pub fn from_table(source_id: impl Into<String>, table: Table) -> Self {
        Self {
            source_id: source_id.into(),
            columns: table.columns,
            rows: table.rows,
            is_loading: false,
            selected_row: None,
        }
    }

    /// Replaces columns and rows wholesale. The selected row is kept.
    pub fn replace_table(&mut self, table: Table) {
        self.columns = table.columns;
        self.rows = table.rows;
    }

    pub fn table(&self) -> Table {
        Table::new(self.columns.clone(), self.rows.clone())
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The row placeholders are filled from: the selected row, else row 0.
    pub fn context_row(&self) -> Option<&Row> {
        self.selected_row.as_ref().or_else(|| self.first_row())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Cell values of `row` in column order, for display.
    pub fn ordered_cells<'a>(&'a self, row: &'a Row) -> Vec<(&'a str, Option<&'a Scalar>)> {
        self.columns
            .iter()
            .map(|c| (c.as_str(), row.get(c)))
            .collect()
    }
}
