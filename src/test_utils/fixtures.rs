use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::Notify;

use crate::client::SearchBackend;
use crate::error::{LookupError, Result};
use crate::model::ResultSet;
use crate::render::{ResultsList, ResultsView, Row, SearchPhase};

/// Ordered record of what backends and views observed.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().push(event.into());
    }

    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    /// Events starting with `prefix`, in order.
    #[must_use]
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Results(ResultSet),
    Status(u16),
}

/// Holds a scripted search open until the test releases it.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    started: Arc<Notify>,
    released: Arc<Notify>,
}

impl Gate {
    /// Wait until the gated search has reached the backend.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.released.notify_one();
    }
}

/// In-process backend answering from a fixed script.
///
/// Unknown queries get an empty result set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    responses: HashMap<String, Scripted>,
    delays: HashMap<String, Duration>,
    gates: HashMap<String, Gate>,
    log: EventLog,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond(mut self, query: &str, results: ResultSet) -> Self {
        self.responses
            .insert(query.to_string(), Scripted::Results(results));
        self
    }

    #[must_use]
    pub fn fail(mut self, query: &str, status: u16) -> Self {
        self.responses
            .insert(query.to_string(), Scripted::Status(status));
        self
    }

    #[must_use]
    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    #[must_use]
    pub fn gated(mut self, query: &str) -> (Self, Gate) {
        let gate = Gate::default();
        self.gates.insert(query.to_string(), gate.clone());
        (self, gate)
    }

    #[must_use]
    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn log(&self) -> EventLog {
        self.log.clone()
    }
}

impl SearchBackend for ScriptedBackend {
    async fn search(&self, query: &str) -> Result<ResultSet> {
        self.log.push(format!("request {query}"));

        if let Some(gate) = self.gates.get(query) {
            gate.started.notify_one();
            gate.released.notified().await;
        }
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        self.log.push(format!("response {query}"));
        match self.responses.get(query) {
            Some(Scripted::Results(results)) => Ok(results.clone()),
            Some(Scripted::Status(status)) => Err(LookupError::Status {
                status: *status,
                body: status.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// Results list that also logs every completed render.
///
/// Each render is logged as `render <first row>` so tests can tell which
/// response reached the container.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub list: ResultsList,
    log: EventLog,
}

impl RecordingView {
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self {
            list: ResultsList::new(),
            log,
        }
    }
}

impl ResultsView for RecordingView {
    fn clear(&mut self) {
        self.list.clear();
    }

    fn append(&mut self, row: Row) {
        self.list.append(row);
    }

    fn set_phase(&mut self, phase: SearchPhase) {
        if matches!(phase, SearchPhase::Rendered { .. }) {
            let first = self
                .list
                .rows()
                .first()
                .map_or("<empty>", |row| row.text.as_str());
            self.log.push(format!("render {first}"));
        }
        self.list.set_phase(phase);
    }
}

/// Temporary directory holding a `config.toml`.
pub struct ConfigFixture {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl ConfigFixture {
    #[must_use]
    pub fn new(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, contents).expect("Failed to write config");
        Self {
            temp_dir,
            config_path,
        }
    }
}
