//! Tests for the external data source pipeline.
mod common;
use bindery::data::{demo_table, gviz};
use bindery::error::SourceError;
use bindery::prelude::*;
use bindery::source::{HttpFetcher, SheetRef, parse_sheet_ref};
use common::*;
use std::sync::Arc;
use std::time::Duration;

fn source_with(sheet_id: &str, fetcher: Arc<FakeFetcher>) -> DataSource {
    DataSource::builder()
        .sheet_id(sheet_id)
        .fetcher(fetcher)
        .build()
        .expect("source builds")
}

#[test]
fn test_parse_sheet_ref() {
    assert_eq!(parse_sheet_ref("").unwrap(), None);
    assert_eq!(parse_sheet_ref("  ").unwrap(), None);
    assert_eq!(parse_sheet_ref("DEMO").unwrap(), Some(SheetRef::Demo));
    assert_eq!(
        parse_sheet_ref("1AbC_x-9").unwrap(),
        Some(SheetRef::Remote("1AbC_x-9".to_string()))
    );
    assert_eq!(
        parse_sheet_ref("https://docs.google.com/spreadsheets/d/1AbC_x-9/edit#gid=0").unwrap(),
        Some(SheetRef::Remote("1AbC_x-9".to_string()))
    );
    assert!(matches!(
        parse_sheet_ref("https://docs.google.com/spreadsheets/d/e/2PACX-1v/pubhtml"),
        Err(SourceError::PublishedLink(_))
    ));
}

#[test]
fn test_gviz_payload_normalization() {
    let table = gviz::parse_response(&gviz_body(GVIZ_PAYLOAD)).unwrap();
    assert_eq!(table.columns, ["Title", "Price", "Note"]);
    assert_eq!(table.rows.len(), 3);
    assert!(table.is_well_formed());

    assert_eq!(table.rows[0]["Price"], Scalar::Number(25000.0));
    assert_eq!(table.rows[1]["Price"], Scalar::from("0"));
    assert_eq!(table.rows[1]["Note"], Scalar::from(""));
    assert_eq!(table.rows[2]["Price"], Scalar::from(""));
    assert_eq!(table.rows[2]["Note"], Scalar::from(""));
}

#[test]
fn test_gviz_rejects_short_and_malformed_bodies() {
    assert!(matches!(
        gviz::parse_response("oops"),
        Err(SourceError::Envelope { len: 4 })
    ));
    assert!(matches!(
        gviz::parse_response(&gviz_body("{not json")),
        Err(SourceError::Json(_))
    ));
}

#[test]
fn test_source_config_defaults_and_overrides() {
    let config: SourceConfig =
        serde_json::from_str(r#"{"sheetId": "abc", "demoDelayMs": 5}"#).unwrap();
    assert_eq!(config.sheet_id, "abc");
    assert_eq!(config.sheet_name, "Sheet1");
    assert_eq!(config.demo_delay(), Duration::from_millis(5));
    assert_eq!(config.timeout(), None);

    let url = config.query_url("abc");
    assert!(url.starts_with("https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out"));
    assert!(url.ends_with("&sheet=Sheet1"));

    let unnamed = SourceConfig {
        sheet_name: String::new(),
        ..SourceConfig::default()
    };
    assert!(!unnamed.query_url("abc").contains("sheet="));
}

#[test]
fn test_request_timeout_is_opt_in() {
    assert_eq!(SourceConfig::default().timeout_secs, None);
    assert_eq!(SourceConfig::default().timeout(), None);
    assert!(HttpFetcher::new(SourceConfig::default().timeout()).is_ok());

    let zero: SourceConfig = serde_json::from_str(r#"{"timeoutSecs": 0}"#).unwrap();
    assert_eq!(zero.timeout(), None);

    let capped: SourceConfig = serde_json::from_str(r#"{"timeoutSecs": 30}"#).unwrap();
    assert_eq!(capped.timeout(), Some(Duration::from_secs(30)));
    assert!(!serde_json::to_string(&SourceConfig::default()).unwrap().contains("timeoutSecs"));
}

#[test]
fn test_source_config_from_file() {
    let path = std::env::temp_dir().join(format!("bindery-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"sheetName": "Produk"}"#).unwrap();

    let config = SourceConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.sheet_name, "Produk");
    assert_eq!(config.demo_delay_ms, 1000);

    std::fs::remove_file(&path).ok();
    assert!(matches!(
        SourceConfig::from_file("/definitely/not/here.json"),
        Err(SourceError::Io { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_demo_fetch_bypasses_network_after_delay() {
    let fake = Arc::new(FakeFetcher::failing());
    let mut source = source_with("DEMO", fake.clone());

    let request = source.begin_fetch().unwrap().expect("fetch starts");
    assert!(source.is_loading());
    assert_eq!(request.url(), None);

    let started = tokio::time::Instant::now();
    let outcome = request.run(fake.as_ref()).await;
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(outcome.origin, FetchOrigin::Demo);

    source.complete_fetch(outcome);
    let dataset = source.dataset();
    assert!(!dataset.is_loading);
    assert_eq!(dataset.columns.len(), 4);
    assert_eq!(dataset.rows.len(), 3);
    assert_eq!(dataset.source_id, "DEMO");
    assert_eq!(fake.request_count(), 0);
}

#[tokio::test]
async fn test_remote_fetch_replaces_dataset() {
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = source_with("sheet-123", fake.clone());

    let origin = source.fetch_data().await.unwrap();
    assert_eq!(origin, Some(FetchOrigin::Remote));
    assert_eq!(source.dataset().columns, ["Title", "Price", "Note"]);
    assert!(!source.is_loading());

    let requests = fake.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("/sheet-123/gviz/tq"));
}

#[tokio::test]
async fn test_fetch_failure_substitutes_fallback() {
    let (notifier, mut notices) = Notifier::channel();
    let mut source = DataSource::builder()
        .sheet_id("sheet-123")
        .fetcher(Arc::new(FakeFetcher::failing()))
        .notifier(notifier)
        .build()
        .unwrap();

    let origin = source.fetch_data().await.unwrap().unwrap();
    assert!(origin.is_fallback());

    let dataset = source.dataset();
    assert!(!dataset.is_loading);
    assert_eq!(dataset.columns, ["Title", "Image", "Price"]);
    assert_eq!(dataset.rows.len(), 2);
    assert!(dataset.rows.iter().all(|r| r.len() == dataset.columns.len()));

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warn);
}

#[tokio::test]
async fn test_published_link_aborts_without_fetching() {
    let (notifier, mut notices) = Notifier::channel();
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = DataSource::builder()
        .sheet_id("https://docs.google.com/spreadsheets/d/e/2PACX-1v/pubhtml")
        .fetcher(fake.clone())
        .notifier(notifier)
        .initial_table(demo_table())
        .build()
        .unwrap();

    let result = source.fetch_data().await;
    assert!(matches!(result, Err(SourceError::PublishedLink(_))));
    assert_eq!(notices.try_recv().unwrap().kind, NoticeKind::Error);
    assert_eq!(fake.request_count(), 0);
    assert!(!source.is_loading());
    assert_eq!(source.dataset().rows.len(), 3);
}

#[test]
fn test_empty_sheet_id_is_a_no_op() {
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = source_with("", fake.clone());
    let origin = tokio_test::block_on(source.fetch_data()).unwrap();
    assert_eq!(origin, None);
    assert!(!source.is_loading());
    assert_eq!(fake.request_count(), 0);
}

#[test]
fn test_full_url_is_normalized_to_bare_id() {
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = source_with(
        "https://docs.google.com/spreadsheets/d/1AbC_x-9/edit#gid=0",
        fake.clone(),
    );

    let request = source.begin_fetch().unwrap().unwrap();
    assert_eq!(source.sheet_id(), "1AbC_x-9");
    assert_eq!(request.sheet_id(), "1AbC_x-9");

    let outcome = tokio_test::block_on(request.run(fake.as_ref()));
    assert_eq!(outcome.origin, FetchOrigin::Remote);
}

#[test]
fn test_previous_rows_stay_readable_while_loading() {
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = DataSource::builder()
        .sheet_id("sheet-123")
        .fetcher(fake.clone())
        .initial_table(demo_table())
        .build()
        .unwrap();

    let request = source.begin_fetch().unwrap().unwrap();
    assert!(source.is_loading());
    assert_eq!(source.dataset().rows.len(), 3);
    assert_eq!(source.dataset().rows[0]["Title"], Scalar::from("Sepatu Nike"));

    let outcome = tokio_test::block_on(request.run(fake.as_ref()));
    source.complete_fetch(outcome);
    assert_eq!(source.dataset().rows[0]["Title"], Scalar::from("Kopi"));
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_fetches_last_writer_wins() {
    let slow = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD).with_delay(Duration::from_secs(5)));
    let mut source = source_with("sheet-slow", slow.clone());

    let first = source.begin_fetch().unwrap().unwrap();
    source.set_sheet_id("DEMO");
    let second = source.begin_fetch().unwrap().unwrap();

    let (first, second) = tokio::join!(first.run(slow.as_ref()), second.run(slow.as_ref()));

    // The demo request settles first; the slow remote answer lands after it.
    source.complete_fetch(second);
    source.complete_fetch(first);

    assert_eq!(source.dataset().source_id, "sheet-slow");
    assert_eq!(source.dataset().columns, ["Title", "Price", "Note"]);
    assert!(!source.is_loading());
}

#[test]
fn test_setters_do_not_fetch() {
    let fake = Arc::new(FakeFetcher::ok(GVIZ_PAYLOAD));
    let mut source = source_with("DEMO", fake.clone());

    source.set_sheet_id("other");
    source.set_selected_row(Some(row(&[("Title", "Shoe")])));
    assert_eq!(fake.request_count(), 0);
    assert!(!source.is_loading());

    tokio_test::block_on(source.fetch_data()).unwrap();
    assert_eq!(fake.request_count(), 1);
    assert!(source.dataset().selected_row.is_some());

    source.set_selected_row(None);
    assert!(source.dataset().selected_row.is_none());
}
