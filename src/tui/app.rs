use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use parking_lot::Mutex;

use crate::input::{InputAction, QueryInput};
use crate::render::{ResultsList, Row, resolve_link};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Search(String),
    Open(String),
    None,
}

pub struct App {
    pub input: QueryInput,
    pub results: Arc<Mutex<ResultsList>>,
    pub selected: usize,
    pub should_quit: bool,
    base_url: String,
}

impl App {
    pub fn new(results: Arc<Mutex<ResultsList>>, base_url: impl Into<String>) -> Self {
        Self {
            input: QueryInput::new(),
            results,
            selected: 0,
            should_quit: false,
            base_url: base_url.into(),
        }
    }

    /// Snapshot of the rows currently in the container.
    pub fn rows(&self) -> Vec<Row> {
        self.results.lock().rows().to_vec()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Up => {
                    self.previous();
                    return AppCommand::None;
                }
                KeyCode::Down => {
                    self.next();
                    return AppCommand::None;
                }
                KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return self
                        .selected_link()
                        .map_or(AppCommand::None, AppCommand::Open);
                }
                _ => {}
            }
        }

        match self.input.handle_key(key) {
            InputAction::Submit(query) => {
                self.selected = 0;
                AppCommand::Search(query)
            }
            InputAction::Quit => {
                self.should_quit = true;
                AppCommand::None
            }
            InputAction::Edited | InputAction::Ignored => AppCommand::None,
        }
    }

    pub fn next(&mut self) {
        let len = self.results.lock().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Selected row index, clamped to the current result count.
    pub fn selection(&self) -> Option<usize> {
        let len = self.results.lock().len();
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn selected_link(&self) -> Option<String> {
        let index = self.selection()?;
        let results = self.results.lock();
        let link = results.rows().get(index)?.link.as_deref()?;
        Some(resolve_link(&self.base_url, link))
    }
}
