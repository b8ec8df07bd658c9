//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use httpmock::Mock;
use httpmock::prelude::*;
use serde_json::{Value, json};

pub const SEARCH_PATH: &str = "/api/search";

/// Response the server gives for `readme` in the worked example.
pub fn readme_response() -> Value {
    json!([["README.md", 0.9], ["docs/README.txt", 0.4]])
}

/// Register a search mock answering `query` with `response`.
pub fn mock_search<'a>(server: &'a MockServer, query: &str, response: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(SEARCH_PATH)
            .header("content-type", "text/plain")
            .body(query);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(response);
    })
}

pub async fn mock_search_async<'a>(
    server: &'a MockServer,
    query: &str,
    response: Value,
) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(SEARCH_PATH)
                .header("content-type", "text/plain")
                .body(query);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(response);
        })
        .await
}
