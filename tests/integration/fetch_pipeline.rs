//! End-to-end fetch over the HTTP client

use crate::mock_server::MockCatalog;
use catalog_fetch::pipeline::{drain, write_details};
use catalog_fetch::DetailFetcher;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_failed_detail_is_skipped_end_to_end() {
    let mut catalog = MockCatalog::new().await;
    let _filter = catalog.mock_filter("Gin", &["1", "2", "3", "4", "5"]).await;
    let mut lookups = Vec::new();
    for id in ["1", "2", "4", "5"] {
        lookups.push(catalog.mock_lookup(id).await);
    }
    let broken = catalog
        .mock_raw("/lookup.php", "3", 200, "not json")
        .await;

    let fetcher = DetailFetcher::new(Arc::new(catalog.client()), catalog.config()).unwrap();
    let mut ids = HashSet::new();
    let consumed = drain(fetcher.fetch("Gin").await.unwrap(), |d| {
        ids.insert(d.id);
    })
    .await;

    assert_eq!(consumed, 4);
    let want: HashSet<String> = ["1", "2", "4", "5"].iter().map(|s| s.to_string()).collect();
    assert_eq!(ids, want);
    for mock in lookups {
        mock.assert_async().await;
    }
    broken.assert_async().await;
}

#[tokio::test]
async fn test_listing_failure_aborts_before_any_lookup() {
    let mut catalog = MockCatalog::new().await;
    let _filter = catalog.mock_raw("/filter.php", "Gin", 500, "boom").await;
    let lookup = catalog
        .server
        .mock("GET", "/lookup.php")
        .expect(0)
        .create_async()
        .await;

    let fetcher = DetailFetcher::new(Arc::new(catalog.client()), catalog.config()).unwrap();
    let err = fetcher.fetch("Gin").await.err().expect("listing fails");

    assert!(matches!(err, catalog_fetch::Error::Remote { status: 500, .. }));
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_empty_listing_prints_nothing() {
    let mut catalog = MockCatalog::new().await;
    let _filter = catalog.mock_raw("/filter.php", "Unobtainium", 200, r#"{"drinks":null}"#).await;

    let fetcher = DetailFetcher::new(Arc::new(catalog.client()), catalog.config()).unwrap();
    let mut out = Vec::new();
    let written = write_details(fetcher.fetch("Unobtainium").await.unwrap(), &mut out)
        .await
        .unwrap();

    assert_eq!(written, 0);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_console_blocks() {
    let mut catalog = MockCatalog::new().await;
    let _filter = catalog.mock_filter("Gin", &["42"]).await;
    let _lookup = catalog.mock_lookup("42").await;

    let fetcher = DetailFetcher::new(Arc::new(catalog.client()), catalog.config()).unwrap();
    let mut out = Vec::new();
    write_details(fetcher.fetch("Gin").await.unwrap(), &mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Name: Drink 42\n\
         Thumbnail: https://img.example/42.jpg\n\
         Instructions: Stir drink 42 with ice.\n\n"
    );
}
