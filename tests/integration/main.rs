//! Integration tests against a mock search server.

#[path = "../common/mod.rs"]
mod common;
mod http_contract;
mod query_body_properties;
mod sequencing_over_http;
