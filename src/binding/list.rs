use super::field::{Resolved, ValueSource};
use crate::data::{Dataset, Row};
use crate::model::Component;

/// Row count shown when a list sets no `limit`.
pub const DEFAULT_LIST_LIMIT: usize = 100;

pub const GRID_IMAGE_PLACEHOLDER: &str = "https://placehold.co/150";
pub const NEWS_DATE_PLACEHOLDER: &str = "12 Oct 2023";

/// Optional case-insensitive substring filter of a list component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub column: String,
    pub needle: String,
}

impl RowFilter {
    /// The filter configured on `component`; both halves must be set.
    pub fn from_component(component: &Component) -> Option<Self> {
        let column = component.bound_column("filterColumn")?;
        let needle = component.prop_text("filterValue")?;
        Some(Self {
            column,
            needle: needle.to_lowercase(),
        })
    }

    /// A missing cell is matched as the empty string.
    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column)
            .map(|cell| cell.to_string().to_lowercase())
            .unwrap_or_default()
            .contains(&self.needle)
    }
}

/// The rows a list component renders: every dataset row through the filter,
/// truncated to the limit. Yields `(index into dataset rows, row)`.
pub fn visible_rows<'a>(component: &Component, dataset: &'a Dataset) -> Vec<(usize, &'a Row)> {
    let filter = RowFilter::from_component(component);
    let limit = component
        .prop_u64("limit")
        .filter(|limit| *limit > 0)
        .map(|limit| limit as usize)
        .unwrap_or(DEFAULT_LIST_LIMIT);

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| filter.as_ref().is_none_or(|f| f.matches(row)))
        .take(limit)
        .collect()
}

/// A list cell: the bound column of this row, else the positional fallback.
pub(crate) fn list_cell(
    row_index: usize,
    row: &Row,
    column: Option<&str>,
    fallback: impl FnOnce() -> String,
) -> Resolved {
    match column.and_then(|c| row.get(c).map(|cell| (c, cell))) {
        Some((column, cell)) => Resolved::new(
            cell.to_string(),
            ValueSource::Row {
                index: row_index,
                column: column.to_string(),
            },
        ),
        None => Resolved::default_value(fallback()),
    }
}

/// One card of a `product_grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Index into `Dataset::rows`.
    pub row_index: usize,
    pub image: Resolved,
    pub title: Resolved,
    pub subtitle: Resolved,
}

/// One card of a `news_grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub row_index: usize,
    pub image: Resolved,
    pub title: Resolved,
    pub date: Resolved,
    pub summary: Option<Resolved>,
}

pub fn product_cards(component: &Component, dataset: &Dataset) -> Vec<ProductCard> {
    let image = component.bound_column("bind_image");
    let title = component.bound_column("bind_title");
    let subtitle = component.bound_column("bind_subtitle");

    visible_rows(component, dataset)
        .into_iter()
        .enumerate()
        .map(|(position, (index, row))| {
            let n = position + 1;
            ProductCard {
                row_index: index,
                image: list_cell(index, row, image.as_deref(), || {
                    GRID_IMAGE_PLACEHOLDER.to_string()
                }),
                title: list_cell(index, row, title.as_deref(), || format!("Item {}", n)),
                subtitle: list_cell(index, row, subtitle.as_deref(), || format!("${}", n * 10)),
            }
        })
        .collect()
}

pub fn news_cards(component: &Component, dataset: &Dataset) -> Vec<NewsCard> {
    let image = component.bound_column("bind_image");
    let title = component.bound_column("bind_title");
    let date = component.bound_column("bind_date");
    let summary = component.bound_column("bind_summary");

    visible_rows(component, dataset)
        .into_iter()
        .enumerate()
        .map(|(position, (index, row))| NewsCard {
            row_index: index,
            image: list_cell(index, row, image.as_deref(), || {
                GRID_IMAGE_PLACEHOLDER.to_string()
            }),
            title: list_cell(index, row, title.as_deref(), || {
                format!("News Title {}", position + 1)
            }),
            date: list_cell(index, row, date.as_deref(), || {
                NEWS_DATE_PLACEHOLDER.to_string()
            }),
            summary: summary
                .as_deref()
                .map(|column| list_cell(index, row, Some(column), String::new)),
        })
        .collect()
}
