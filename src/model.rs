//! Wire types for the search endpoint.

use serde::{Deserialize, Serialize};

/// One hit returned by the server.
///
/// On the wire this is a two-element array `[path, rank]`. The rank is kept
/// for `--json` output but never used for ordering; the server sends results
/// already sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireItem", into = "WireItem")]
pub struct ResultItem {
    pub path: String,
    pub rank: f64,
}

/// Results in response order.
pub type ResultSet = Vec<ResultItem>;

// Non-finite scores are serialized by the server as `null`.
type WireItem = (String, Option<f64>);

impl From<WireItem> for ResultItem {
    fn from((path, rank): WireItem) -> Self {
        Self {
            path,
            rank: rank.unwrap_or(f64::NAN),
        }
    }
}

impl From<ResultItem> for WireItem {
    fn from(item: ResultItem) -> Self {
        let rank = item.rank.is_finite().then_some(item.rank);
        (item.path, rank)
    }
}

impl ResultItem {
    pub fn new(path: impl Into<String>, rank: f64) -> Self {
        Self {
            path: path.into(),
            rank,
        }
    }
}

/// Decode a response body into a result set.
pub fn parse_result_set(body: &[u8]) -> serde_json::Result<ResultSet> {
    serde_json::from_slice(body)
}
