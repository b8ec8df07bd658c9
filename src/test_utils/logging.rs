//! Log capture for tests.
//!
//! [`capture_logs`] installs a subscriber for the current thread only, so
//! tests running in parallel do not see each other's events. Async tests must
//! run on the current-thread runtime (the `#[tokio::test]` default).

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing::dispatcher::DefaultGuard;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

/// A captured log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Events recorded since [`capture_logs`] was called.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    /// First event at `level` whose message contains `message`.
    #[must_use]
    pub fn find(&self, level: Level, message: &str) -> Option<LogEntry> {
        self.entries
            .lock()
            .iter()
            .find(|entry| entry.level == level && entry.message.contains(message))
            .cloned()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|entry| entry.level == Level::WARN)
    }

    /// Captured events, one per line, for assertion messages.
    #[must_use]
    pub fn dump(&self) -> String {
        let entries = self.entries.lock();
        if entries.is_empty() {
            return String::from("No logs captured");
        }
        entries
            .iter()
            .map(|entry| {
                let fields: Vec<String> = entry
                    .fields
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect();
                format!(
                    "[{}] {}: {} {}",
                    entry.level,
                    entry.target,
                    entry.message,
                    fields.join(" ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.entries.lock().push(LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Capture every event on this thread until the guard is dropped.
#[must_use]
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        entries: Arc::clone(&capture.entries),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
