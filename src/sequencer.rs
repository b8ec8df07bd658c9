//! Ordering of overlapping searches.
//!
//! Two Enter presses in quick succession produce two searches sharing one
//! results container. [`Sequencing::Queued`] runs them strictly one after
//! another, so renders follow issue order. [`Sequencing::Concurrent`] lets
//! them overlap, and whichever response lands last wins the container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::client::SearchBackend;
use crate::controller::{SearchController, SearchOutcome};
use crate::error::LookupError;
use crate::render::ResultsView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sequencing {
    /// Each search starts only after the previous one has rendered or failed.
    #[default]
    Queued,
    /// Searches run as soon as they are submitted.
    Concurrent,
}

impl FromStr for Sequencing {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "queued" => Ok(Self::Queued),
            "concurrent" => Ok(Self::Concurrent),
            _ => Err(LookupError::Config(format!(
                "invalid sequencing {value} (expected queued|concurrent)"
            ))),
        }
    }
}

// Config files accept the same spellings as flags and env vars.
impl<'de> Deserialize<'de> for Sequencing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Sequencing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => f.write_str("queued"),
            Self::Concurrent => f.write_str("concurrent"),
        }
    }
}

struct Job {
    prompt: String,
    done: oneshot::Sender<SearchOutcome>,
}

/// Handle to a submitted search.
#[derive(Debug)]
pub struct PendingSearch {
    rx: oneshot::Receiver<SearchOutcome>,
}

impl PendingSearch {
    /// Wait for the search to finish. `None` if the dispatcher shut down first.
    pub async fn outcome(self) -> Option<SearchOutcome> {
        self.rx.await.ok()
    }
}

/// Submits searches to a controller under a [`Sequencing`] policy.
///
/// Must be created inside a tokio runtime.
pub struct SearchDispatcher<B, V> {
    controller: SearchController<B, V>,
    sequencing: Sequencing,
    queue: Option<mpsc::UnboundedSender<Job>>,
}

impl<B, V> fmt::Debug for SearchDispatcher<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchDispatcher")
            .field("sequencing", &self.sequencing)
            .finish_non_exhaustive()
    }
}

impl<B: SearchBackend, V: ResultsView> SearchDispatcher<B, V> {
    pub fn new(controller: SearchController<B, V>, sequencing: Sequencing) -> Self {
        let queue = match sequencing {
            Sequencing::Queued => Some(spawn_worker(controller.clone())),
            Sequencing::Concurrent => None,
        };
        Self {
            controller,
            sequencing,
            queue,
        }
    }

    #[must_use]
    pub const fn sequencing(&self) -> Sequencing {
        self.sequencing
    }

    #[must_use]
    pub const fn controller(&self) -> &SearchController<B, V> {
        &self.controller
    }

    pub fn submit(&self, prompt: impl Into<String>) -> PendingSearch {
        let prompt = prompt.into();
        let (done, rx) = oneshot::channel();

        match self.queue.as_ref() {
            Some(queue) => {
                debug!(query = %prompt, "search queued");
                // A dropped job resolves its handle to `None`.
                if queue.send(Job { prompt, done }).is_err() {
                    warn!("search worker has stopped");
                }
            }
            None => {
                let controller = self.controller.clone();
                tokio::spawn(async move {
                    let outcome = controller.search(&prompt).await;
                    let _ = done.send(outcome);
                });
            }
        }

        PendingSearch { rx }
    }
}

fn spawn_worker<B: SearchBackend, V: ResultsView>(
    controller: SearchController<B, V>,
) -> mpsc::UnboundedSender<Job> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let outcome = controller.search(&job.prompt).await;
            let _ = job.done.send(outcome);
        }
    });
    tx
}
