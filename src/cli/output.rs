use console::style;
use serde::Serialize;

use crate::error::{LookupError, Result};
use crate::model::ResultItem;
use crate::render::{Row, resolve_link};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// One result as printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ResultJson<'a> {
    pub path: &'a str,
    pub rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'a str>,
}

impl<'a> ResultJson<'a> {
    #[must_use]
    pub fn new(item: &'a ResultItem, row: &'a Row) -> Self {
        Self {
            path: &item.path,
            rank: item.rank.is_finite().then_some(item.rank),
            link: row.link.as_deref(),
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub fn emit_json_error(error: &LookupError) {
    let payload = serde_json::json!({
        "error": true,
        "code": error.code(),
        "message": error.to_string(),
    });
    println!("{}", serde_json::to_string(&payload).unwrap_or_default());
}

/// Format a row for terminal output.
///
/// Link rows become OSC 8 hyperlinks when `hyperlinks` is set, otherwise the
/// path is printed as-is.
#[must_use]
pub fn format_row(row: &Row, base_url: &str, hyperlinks: bool) -> String {
    match row.link.as_deref() {
        Some(link) if hyperlinks => {
            let url = resolve_link(base_url, link);
            format!(
                "\x1b]8;;{url}\x1b\\{}\x1b]8;;\x1b\\",
                style(&row.text).cyan().underlined()
            )
        }
        _ => row.text.clone(),
    }
}

pub fn emit_rows(rows: &[Row], base_url: &str) {
    let hyperlinks = console::user_attended();
    for row in rows {
        println!("{}", format_row(row, base_url, hyperlinks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_row_is_path_only() {
        let row = Row::link("README.md", "files/README.md");
        assert_eq!(format_row(&row, "http://127.0.0.1:6969", false), "README.md");
    }

    #[test]
    fn test_hyperlink_row_targets_server_file() {
        let row = Row::link("README.md", "files/README.md");
        let line = format_row(&row, "http://127.0.0.1:6969", true);
        assert!(line.starts_with("\x1b]8;;http://127.0.0.1:6969/files/README.md\x1b\\"));
        assert!(line.contains("README.md"));
        assert!(line.ends_with("\x1b]8;;\x1b\\"));
    }

    #[test]
    fn test_text_row_never_hyperlinked() {
        let row = Row::text("notes.txt");
        assert_eq!(format_row(&row, "http://127.0.0.1:6969", true), "notes.txt");
    }

    #[test]
    fn test_emit_json_serialize_failure_is_decode_error() {
        let mut unserializable = std::collections::HashMap::new();
        unserializable.insert((1, 2), "tuple keys are not JSON object keys");
        let err = emit_json(&unserializable).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
        assert_eq!(err.code(), "decode");
    }

    #[test]
    fn test_result_json_omits_nan_rank() {
        let item = ResultItem::new("empty.txt", f64::NAN);
        let row = Row::text("empty.txt");
        let json = serde_json::to_value(ResultJson::new(&item, &row)).unwrap();
        assert_eq!(json, serde_json::json!({"path": "empty.txt", "rank": null}));
    }
}
