//! Results container.
//!
//! A search owns the container for its whole lifetime: it clears it when
//! issued, then clears it again and appends one [`Row`] per result once the
//! response has been decoded. Nothing is kept across searches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LookupError;
use crate::model::ResultItem;

/// How a result path is turned into a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Path only.
    Text,
    /// Path plus a link to `<prefix><path>`.
    #[default]
    Link,
}

impl FromStr for RenderMode {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "link" => Ok(Self::Link),
            _ => Err(LookupError::Config(format!(
                "invalid render mode {value} (expected text|link)"
            ))),
        }
    }
}

// Config files accept the same spellings as flags and env vars.
impl<'de> Deserialize<'de> for RenderMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Link => f.write_str("link"),
        }
    }
}

/// Rendering options shared by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub link_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Link,
            link_prefix: crate::config::DEFAULT_LINK_PREFIX.to_string(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn from_config(config: &crate::config::RenderConfig) -> Self {
        Self {
            mode: config.mode,
            link_prefix: config.link_prefix.clone(),
        }
    }

    #[must_use]
    pub fn row(&self, item: &ResultItem) -> Row {
        match self.mode {
            RenderMode::Text => Row::text(&item.path),
            // Plain concatenation; the path is not percent-encoded.
            RenderMode::Link => Row::link(&item.path, format!("{}{}", self.link_prefix, item.path)),
        }
    }
}

/// One line in the results container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Row {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(target.into()),
        }
    }
}

/// Where a search currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Pending {
        query: String,
    },
    Rendered {
        count: usize,
    },
    Failed {
        reason: String,
    },
}

/// Something a search can render into.
pub trait ResultsView: Send + 'static {
    fn clear(&mut self);

    fn append(&mut self, row: Row);

    fn set_phase(&mut self, _phase: SearchPhase) {}
}

/// In-memory results container.
///
/// The terminal UI draws from this, and tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct ResultsList {
    rows: Vec<Row>,
    phase: SearchPhase,
}

impl ResultsList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }
}

impl ResultsView for ResultsList {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn set_phase(&mut self, phase: SearchPhase) {
        self.phase = phase;
    }
}

/// Absolute URL for a row link, relative to the server root.
#[must_use]
pub fn resolve_link(base_url: &str, link: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        link.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_prefix_plus_path_without_encoding() {
        let options = RenderOptions::default();
        let row = options.row(&ResultItem::new("docs/My File#1?.md", 0.1));
        assert_eq!(row.text, "docs/My File#1?.md");
        assert_eq!(row.link.as_deref(), Some("files/docs/My File#1?.md"));
    }

    #[test]
    fn test_text_mode_has_no_link() {
        let options = RenderOptions {
            mode: RenderMode::Text,
            ..RenderOptions::default()
        };
        let row = options.row(&ResultItem::new("README.md", 0.9));
        assert_eq!(row, Row::text("README.md"));
    }

    #[test]
    fn test_render_mode_parse() {
        assert_eq!("LINK".parse::<RenderMode>().unwrap(), RenderMode::Link);
        assert_eq!("text".parse::<RenderMode>().unwrap(), RenderMode::Text);
        assert!("html".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_results_list_clear_replaces() {
        let mut list = ResultsList::new();
        list.append(Row::text("a"));
        list.append(Row::text("b"));
        list.clear();
        list.append(Row::text("c"));
        assert_eq!(list.texts(), vec!["c"]);
    }

    #[test]
    fn test_resolve_link() {
        assert_eq!(
            resolve_link("http://127.0.0.1:6969/", "files/a b.md"),
            "http://127.0.0.1:6969/files/a b.md"
        );
        assert_eq!(
            resolve_link("http://127.0.0.1:6969", "files/x.md"),
            "http://127.0.0.1:6969/files/x.md"
        );
    }
}
