use crate::data::Row;
use crate::model::Component;
use std::fmt;

/// Where a resolved value was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// The row focused by a list-item activation.
    SelectedRow { column: String },
    /// A dataset row, by index into `Dataset::rows`.
    Row { index: usize, column: String },
    /// The component's own prop.
    Literal { key: String },
    /// Nothing matched; a built-in fallback.
    Default,
}

impl ValueSource {
    pub fn is_bound(&self) -> bool {
        matches!(self, ValueSource::SelectedRow { .. } | ValueSource::Row { .. })
    }
}

/// An effective display value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: ValueSource,
}

impl Resolved {
    pub fn new(value: impl Into<String>, source: ValueSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn default_value(value: impl Into<String>) -> Self {
        Self::new(value, ValueSource::Default)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One candidate source for a field: a column of the dataset or a literal prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bindable {
    Column(String),
    Literal { key: String, value: String },
}

/// Which rows a column candidate may read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScope {
    /// Selected row when it has a non-empty value, else row 0.
    Context,
    /// Selected row only. Used by detail views, which expect navigation to
    /// have supplied the row.
    SelectedOnly,
}

/// An ordered chain of [`Bindable`] candidates with a final default.
///
/// Built once from a component's props; the first candidate that yields a
/// value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    pub candidates: Vec<Bindable>,
    pub default: &'static str,
}

impl BoundField {
    /// Reads `bind_keys` as column candidates followed by `literal_keys` as
    /// literal candidates. Unset and empty props are skipped.
    pub fn from_props(
        component: &Component,
        bind_keys: &[&str],
        literal_keys: &[&str],
        default: &'static str,
    ) -> Self {
        let columns = bind_keys
            .iter()
            .filter_map(|key| component.bound_column(key))
            .map(Bindable::Column);
        let literals = literal_keys.iter().filter_map(|key| {
            component.prop_text(key).map(|value| Bindable::Literal {
                key: key.to_string(),
                value,
            })
        });
        Self {
            candidates: columns.chain(literals).collect(),
            default,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().filter_map(|c| match c {
            Bindable::Column(column) => Some(column.as_str()),
            Bindable::Literal { .. } => None,
        })
    }

    pub fn is_bound(&self) -> bool {
        self.columns().next().is_some()
    }
}

/// The cell `column` of `row` as display text, if present and non-empty.
pub(crate) fn filled_cell(row: &Row, column: &str) -> Option<String> {
    row.get(column)
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.to_string())
}
