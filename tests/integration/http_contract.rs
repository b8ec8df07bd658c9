use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use parking_lot::Mutex;
use serde_json::json;

use lookup::LookupError;
use lookup::client::{HttpBackend, SearchBackend};
use lookup::controller::{SearchController, SearchOutcome};
use lookup::model::ResultItem;
use lookup::render::{RenderOptions, ResultsList, Row, SearchPhase};

use super::common::{SEARCH_PATH, mock_search_async, readme_response};

#[tokio::test]
async fn test_readme_end_to_end() {
    let server = MockServer::start_async().await;
    let mock = mock_search_async(&server, "readme", readme_response()).await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let view = Arc::new(Mutex::new(ResultsList::new()));
    let controller = SearchController::new(backend, Arc::clone(&view), RenderOptions::default());

    let outcome = controller.search("readme").await;

    mock.assert_async().await;
    assert!(matches!(outcome, SearchOutcome::Rendered { count: 2, .. }));
    let view = view.lock();
    assert_eq!(
        view.rows(),
        &[
            Row::link("README.md", "files/README.md"),
            Row::link("docs/README.txt", "files/docs/README.txt"),
        ]
    );
}

#[tokio::test]
async fn test_empty_query_is_posted_as_empty_body() {
    let server = MockServer::start_async().await;
    let mock = mock_search_async(&server, "", json!([])).await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let results = backend.search("").await.unwrap();

    mock.assert_async().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_special_characters_are_sent_unescaped() {
    let query = r#"a&b=c "quoted" <tag> 100% ünïcode/../path?x#y"#;
    let server = MockServer::start_async().await;
    let mock = mock_search_async(&server, query, json!([["x.md", 1.0]])).await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let results = backend.search(query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(results, vec![ResultItem::new("x.md", 1.0)]);
}

#[tokio::test]
async fn test_same_search_twice_yields_same_container() {
    let server = MockServer::start_async().await;
    let mock = mock_search_async(&server, "readme", readme_response()).await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let view = Arc::new(Mutex::new(ResultsList::new()));
    let controller = SearchController::new(backend, Arc::clone(&view), RenderOptions::default());

    controller.search("readme").await;
    let first = view.lock().rows().to_vec();
    controller.search("readme").await;
    let second = view.lock().rows().to_vec();

    mock.assert_calls_async(2).await;
    assert_eq!(first, second);
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(SEARCH_PATH);
            then.status(404).body("404");
        })
        .await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let err = backend.search("readme").await.unwrap_err();

    assert!(matches!(err, LookupError::Status { status: 404, ref body } if body == "404"));
}

#[tokio::test]
async fn test_malformed_json_fails_and_leaves_container_cleared() {
    let server = MockServer::start_async().await;
    let good = mock_search_async(&server, "readme", readme_response()).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(SEARCH_PATH).body("broken");
            then.status(200).body("[[\"a.md\", 0.1],");
        })
        .await;

    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let view = Arc::new(Mutex::new(ResultsList::new()));
    let failures = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&failures);
    let controller = SearchController::new(backend, Arc::clone(&view), RenderOptions::default())
        .with_error_handler(move |query, error| {
            seen.lock().push((query.to_string(), error.code()));
        });

    controller.search("readme").await;
    good.assert_async().await;
    assert_eq!(view.lock().len(), 2);

    let outcome = controller.search("broken").await;
    assert!(matches!(
        outcome,
        SearchOutcome::Failed {
            error: LookupError::Decode(_),
            ..
        }
    ));
    assert!(view.lock().is_empty());
    assert!(matches!(view.lock().phase(), SearchPhase::Failed { .. }));
    assert_eq!(
        failures.lock().as_slice(),
        &[("broken".to_string(), "decode")]
    );
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Nothing listens on the discard port.
    let backend = HttpBackend::new("http://127.0.0.1:9", None).unwrap();
    let err = backend.search("readme").await.unwrap_err();
    assert!(matches!(err, LookupError::Http(_)));
}

#[tokio::test]
async fn test_configured_timeout_fails_search() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(SEARCH_PATH);
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(readme_response());
        })
        .await;

    let backend = HttpBackend::new(&server.base_url(), Some(Duration::from_millis(200))).unwrap();
    let err = backend.search("readme").await.unwrap_err();
    assert!(matches!(err, LookupError::Http(_)));
}
