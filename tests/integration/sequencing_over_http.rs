use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use parking_lot::Mutex;
use serde_json::json;

use lookup::client::HttpBackend;
use lookup::controller::SearchController;
use lookup::render::RenderOptions;
use lookup::sequencer::{SearchDispatcher, Sequencing};
use lookup::test_utils::fixtures::{EventLog, RecordingView};

use super::common::{SEARCH_PATH, mock_search_async};

async fn slow_and_fast(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(POST).path(SEARCH_PATH).body("slow");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!([["slow.md", 0.5]]));
        })
        .await;
    mock_search_async(server, "fast", json!([["fast.md", 0.5]])).await;
}

fn dispatcher(
    server: &MockServer,
    sequencing: Sequencing,
) -> (SearchDispatcher<HttpBackend, RecordingView>, EventLog) {
    let log = EventLog::new();
    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let view = Arc::new(Mutex::new(RecordingView::new(log.clone())));
    let controller = SearchController::new(backend, view, RenderOptions::default());
    (SearchDispatcher::new(controller, sequencing), log)
}

#[tokio::test]
async fn test_queued_renders_follow_issue_order() {
    let server = MockServer::start_async().await;
    slow_and_fast(&server).await;
    let (dispatcher, log) = dispatcher(&server, Sequencing::Queued);

    let first = dispatcher.submit("slow");
    let second = dispatcher.submit("fast");
    assert!(second.outcome().await.unwrap().is_rendered());
    assert!(first.outcome().await.unwrap().is_rendered());

    assert_eq!(log.events(), vec!["render slow.md", "render fast.md"]);
    let view = dispatcher.controller().view();
    assert_eq!(view.lock().list.texts(), vec!["fast.md"]);
}

#[tokio::test]
async fn test_concurrent_lets_stale_response_win() {
    let server = MockServer::start_async().await;
    slow_and_fast(&server).await;
    let (dispatcher, log) = dispatcher(&server, Sequencing::Concurrent);

    let first = dispatcher.submit("slow");
    let second = dispatcher.submit("fast");
    assert!(first.outcome().await.unwrap().is_rendered());
    assert!(second.outcome().await.unwrap().is_rendered());

    assert_eq!(log.events(), vec!["render fast.md", "render slow.md"]);
    let view = dispatcher.controller().view();
    assert_eq!(view.lock().list.texts(), vec!["slow.md"]);
}
