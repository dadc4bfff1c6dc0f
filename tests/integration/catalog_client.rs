//! HTTP catalog client behaviour

use crate::mock_server::MockCatalog;
use catalog_fetch::{CatalogSource, Error, FetchConfig, HttpCatalogClient};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_list_by_filter() {
    let mut catalog = MockCatalog::new().await;
    let mock = catalog.mock_filter("Gin", &["11001", "11002"]).await;

    let items = catalog.client().list_by_filter("Gin").await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "11001");
    assert_eq!(items[0].name, "Drink 11001");
    assert_eq!(items[1].thumbnail, "https://img.example/11002.jpg");
}

#[tokio::test]
async fn test_filter_value_is_url_encoded() {
    let mut catalog = MockCatalog::new().await;
    let mock = catalog.mock_filter("Dry Vermouth", &["1"]).await;

    let items = catalog.client().list_by_filter("Dry Vermouth").await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_empty_listing_variants() {
    let mut catalog = MockCatalog::new().await;
    let _null = catalog.mock_raw("/filter.php", "a", 200, r#"{"drinks":null}"#).await;
    let _text = catalog.mock_raw("/filter.php", "b", 200, r#"{"drinks":"no data found"}"#).await;
    let _empty = catalog.mock_raw("/filter.php", "c", 200, r#"{"drinks":[]}"#).await;
    let client = catalog.client();

    for filter in ["a", "b", "c"] {
        let items = client.list_by_filter(filter).await.unwrap();
        assert!(items.is_empty(), "filter {filter}");
    }
}

#[tokio::test]
async fn test_get_detail() {
    let mut catalog = MockCatalog::new().await;
    let mock = catalog.mock_lookup("11007").await;

    let detail = catalog.client().get_detail("11007").await.unwrap();

    mock.assert_async().await;
    assert_eq!(detail.id, "11007");
    assert_eq!(detail.name, "Drink 11007");
    assert_eq!(detail.thumbnail, "https://img.example/11007.jpg");
    assert_eq!(detail.instructions, "Stir drink 11007 with ice.");
}

#[tokio::test]
async fn test_get_detail_without_match_is_empty() {
    let mut catalog = MockCatalog::new().await;
    let _mock = catalog.mock_raw("/lookup.php", "404", 200, r#"{"drinks":null}"#).await;

    let detail = catalog.client().get_detail("404").await.unwrap();
    assert!(detail.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut catalog = MockCatalog::new().await;
    let _lookup = catalog.mock_raw("/lookup.php", "1", 200, "<html>oops</html>").await;
    let _filter = catalog.mock_raw("/filter.php", "Gin", 200, r#"{"drinks":[{"strDrink":"no id"}]}"#).await;
    let client = catalog.client();

    assert!(client.get_detail("1").await.unwrap_err().is_decode());
    assert!(client.list_by_filter("Gin").await.unwrap_err().is_decode());
}

#[tokio::test]
async fn test_throttled_response_is_remote_error() {
    let mut catalog = MockCatalog::new().await;
    let _mock = catalog
        .mock_raw("/lookup.php", "1", 429, "<html>Too Many Requests</html>")
        .await;

    match catalog.client().get_detail("1").await.unwrap_err() {
        Error::Remote { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("Too Many Requests"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Port 1 is reserved and refuses connections.
    let config = FetchConfig::new().with_base_url("http://127.0.0.1:1");
    let client = HttpCatalogClient::new(&config).unwrap();

    let err = client.list_by_filter("Gin").await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
    let ctx = err.context().unwrap();
    assert_eq!(ctx.source.as_deref(), Some("catalog.list"));
    assert_eq!(ctx.details.as_deref(), Some("http://127.0.0.1:1/filter.php"));
}

#[tokio::test]
async fn test_request_timeout_is_network_error() {
    // Accepts connections and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = FetchConfig::new()
        .with_base_url(format!("http://{addr}"))
        .with_request_timeout(Duration::from_millis(200));
    let client = HttpCatalogClient::new(&config).unwrap();

    let start = Instant::now();
    let err = client.get_detail("11007").await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(
        err.context().and_then(|c| c.source.as_deref()),
        Some("catalog.lookup")
    );

    silent.abort();
}
