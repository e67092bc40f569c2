//! Common test utilities for building documents, datasets and fake sheet servers.
use async_trait::async_trait;
use bindery::error::SourceError;
use bindery::prelude::*;
use bindery::source::SheetFetcher;
use std::result::Result;
use std::sync::Mutex;
use std::time::Duration;

/// Builds a row from `(column, text)` pairs.
#[allow(dead_code)]
pub fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Scalar::from(*v)))
        .collect()
}

/// A dataset whose columns are the keys of the first row, in the given order.
#[allow(dead_code)]
pub fn dataset(columns: &[&str], rows: Vec<Row>) -> Dataset {
    let columns = columns.iter().map(|c| c.to_string()).collect();
    Dataset::from_table("test", Table::new(columns, rows))
}

/// Two products, a shoe and a shirt.
#[allow(dead_code)]
pub fn shop_dataset() -> Dataset {
    dataset(
        &["Title", "Price", "Image", "Cat"],
        vec![
            row(&[
                ("Title", "Shoe"),
                ("Price", "Rp 500"),
                ("Image", "https://img/shoe.png"),
                ("Cat", "Sport"),
            ]),
            row(&[
                ("Title", "Shirt"),
                ("Price", "Rp 200"),
                ("Image", "https://img/shirt.png"),
                ("Cat", "Fashion"),
            ]),
        ],
    )
}

/// Home screen with a navigating button and a grid, plus a detail screen.
#[allow(dead_code)]
pub fn two_screen_store() -> DocumentStore {
    DocumentStore::new(vec![
        Screen::new("screen-home", "Home").with_components(vec![
            Component::new("btn-go", ComponentType::Button)
                .with_prop("label", "Go")
                .with_prop("actionType", "navigate")
                .with_prop("targetScreenId", "screen-detail"),
            Component::new("grid", ComponentType::ProductGrid)
                .with_prop("bind_title", "Title")
                .with_prop("bind_subtitle", "Price")
                .with_prop("itemActionType", "navigate")
                .with_prop("itemTargetScreenId", "screen-detail"),
        ]),
        Screen::new("screen-detail", "Detail").with_components(vec![
            Component::new("bar", ComponentType::Toolbar).with_prop("title", "Detail"),
            Component::new("card", ComponentType::ProductDetail)
                .with_prop("dataBind_title", "Title")
                .with_prop("dataBind_price", "Price")
                .with_prop("whatsappNumber", "628111"),
        ]),
    ])
}

/// Wraps a JSON payload in the visualization endpoint envelope.
#[allow(dead_code)]
pub fn gviz_body(payload: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({});", payload)
}

#[allow(dead_code)]
pub const GVIZ_PAYLOAD: &str = r#"{
    "version": "0.6",
    "status": "ok",
    "table": {
        "cols": [
            {"id": "A", "label": "Title", "type": "string"},
            {"id": "B", "label": "Price", "type": "number"},
            {"id": "C", "label": "Note", "type": "string"}
        ],
        "rows": [
            {"c": [{"v": "Kopi"}, {"v": 25000, "f": "25.000"}, {"v": "hot"}]},
            {"c": [{"v": "Teh"}, {"v": 0, "f": "0"}, null]},
            {"c": [{"v": "Susu"}]}
        ]
    }
}"#;

/// What a [`FakeFetcher`] answers.
#[allow(dead_code)]
#[derive(Clone)]
pub enum Reply {
    Body(String),
    Fail,
}

/// In-memory sheet server that records every requested URL.
#[allow(dead_code)]
pub struct FakeFetcher {
    reply: Reply,
    delay: Duration,
    pub requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(payload: &str) -> Self {
        Self::new(Reply::Body(gviz_body(payload)))
    }

    pub fn failing() -> Self {
        Self::new(Reply::Fail)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SheetFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Fail => Err(SourceError::Envelope { len: 0 }),
        }
    }
}
