use super::model::{Row, Table};
use crate::model::Scalar;

/// Source identifier that serves [`demo_table`] without touching the network.
pub const DEMO_SHEET_ID: &str = "DEMO";

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Scalar::from(*v)))
        .collect()
}

/// The canned 4-column, 3-row product catalogue served for `DEMO`.
pub fn demo_table() -> Table {
    Table::new(
        vec![
            "Title".to_string(),
            "Image".to_string(),
            "Price".to_string(),
            "Description".to_string(),
        ],
        vec![
            row(&[
                ("Title", "Sepatu Nike"),
                ("Image", "https://placehold.co/400x400/png?text=Shoe"),
                ("Price", "Rp 500.000"),
                ("Description", "Sepatu lari nyaman"),
            ]),
            row(&[
                ("Title", "Baju Adidas"),
                ("Image", "https://placehold.co/400x400/png?text=Shirt"),
                ("Price", "Rp 200.000"),
                ("Description", "Baju olahraga"),
            ]),
            row(&[
                ("Title", "Topi Puma"),
                ("Image", "https://placehold.co/400x400/png?text=Hat"),
                ("Price", "Rp 100.000"),
                ("Description", "Topi santai"),
            ]),
        ],
    )
}

/// The small mock table substituted when a fetch fails.
pub fn fallback_table() -> Table {
    Table::new(
        vec!["Title".to_string(), "Image".to_string(), "Price".to_string()],
        vec![
            row(&[("Title", "Item 1"), ("Image", ""), ("Price", "100")]),
            row(&[("Title", "Item 2"), ("Image", ""), ("Price", "200")]),
        ],
    )
}
