//! Query input field and its key binding.
//!
//! Only a press of `Enter` submits a search. Typing edits the buffer and
//! never issues a request.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Search for the current buffer contents.
    Submit(String),
    Edited,
    Quit,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    buffer: String,
}

impl QueryInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if key.kind != KeyEventKind::Press {
            return InputAction::Ignored;
        }

        match key.code {
            // The query stays in the field after submitting.
            KeyCode::Enter => InputAction::Submit(self.buffer.clone()),
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Ignored
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                InputAction::Edited
            }
            KeyCode::Backspace => {
                if self.buffer.pop().is_some() {
                    InputAction::Edited
                } else {
                    InputAction::Ignored
                }
            }
            _ => InputAction::Ignored,
        }
    }

    /// Insert pasted text verbatim.
    pub fn paste(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
