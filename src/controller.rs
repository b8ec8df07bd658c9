//! Search controller: one query in, one rendered result list out.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::client::SearchBackend;
use crate::error::LookupError;
use crate::model::ResultSet;
use crate::render::{RenderOptions, ResultsView, SearchPhase};

/// Callback for failed searches. Receives the query and the failure.
pub type ErrorHandler = Arc<dyn Fn(&str, &LookupError) + Send + Sync>;

/// How a single search ended.
///
/// A rendered outcome keeps the decoded results alongside the rows that went
/// into the container.
#[derive(Debug)]
pub enum SearchOutcome {
    Rendered {
        query: String,
        count: usize,
        results: ResultSet,
    },
    Failed { query: String, error: LookupError },
}

impl SearchOutcome {
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Rendered { query, .. } | Self::Failed { query, .. } => query,
        }
    }

    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

pub struct SearchController<B, V> {
    backend: Arc<B>,
    view: Arc<Mutex<V>>,
    options: RenderOptions,
    on_error: Option<ErrorHandler>,
}

impl<B, V> Clone for SearchController<B, V> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            view: Arc::clone(&self.view),
            options: self.options.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<B, V> fmt::Debug for SearchController<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("options", &self.options)
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

impl<B: SearchBackend, V: ResultsView> SearchController<B, V> {
    pub fn new(backend: B, view: Arc<Mutex<V>>, options: RenderOptions) -> Self {
        Self {
            backend: Arc::new(backend),
            view,
            options,
            on_error: None,
        }
    }

    /// Install a callback invoked after a search fails.
    #[must_use]
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &LookupError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    /// Run one search against the backend and render its results.
    ///
    /// The container is cleared before the request goes out and stays empty
    /// while it is in flight. A failure leaves it empty; nothing is retried.
    pub async fn search(&self, prompt: &str) -> SearchOutcome {
        {
            let mut view = self.view.lock();
            view.clear();
            view.set_phase(SearchPhase::Pending {
                query: prompt.to_string(),
            });
        }
        debug!(query = %prompt, "search issued");

        match self.backend.search(prompt).await {
            Ok(results) => {
                let count = results.len();
                {
                    let mut view = self.view.lock();
                    view.clear();
                    for item in &results {
                        view.append(self.options.row(item));
                    }
                    view.set_phase(SearchPhase::Rendered { count });
                }
                debug!(query = %prompt, count, "search rendered");
                SearchOutcome::Rendered {
                    query: prompt.to_string(),
                    count,
                    results,
                }
            }
            Err(error) => {
                warn!(query = %prompt, error = %error, "search failed");
                self.view.lock().set_phase(SearchPhase::Failed {
                    reason: error.to_string(),
                });
                if let Some(handler) = self.on_error.as_ref() {
                    handler(prompt, &error);
                }
                SearchOutcome::Failed {
                    query: prompt.to_string(),
                    error,
                }
            }
        }
    }
}
