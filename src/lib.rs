//! lookup - client for a local document search server.
//!
//! A query is POSTed as plain text to `/api/search`; the server answers with
//! `[path, rank]` pairs that are rendered, in order, into a results
//! container. See [`controller::SearchController`] for a single search and
//! [`sequencer::SearchDispatcher`] for ordering between overlapping ones.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod sequencer;
pub mod test_utils;
pub mod tui;

pub use error::{LookupError, Result};
