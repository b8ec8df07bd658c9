//! Interactive terminal UI.
//!
//! A query field on top and the results container below. Enter submits the
//! field to the search dispatcher; rows are redrawn from the shared
//! [`ResultsList`] on every tick.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use parking_lot::Mutex;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::client::{HttpBackend, SearchBackend};
use crate::config::Config;
use crate::controller::SearchController;
use crate::error::Result;
use crate::render::{RenderOptions, ResultsList};
use crate::sequencer::SearchDispatcher;

pub mod app;
pub mod ui;

pub use app::{App, AppCommand};

/// Run the interactive UI until the user quits.
///
/// Must be called from within a tokio runtime; searches run on its workers.
pub fn run(config: &Config) -> Result<()> {
    let backend = HttpBackend::from_config(&config.server)?;
    let results = Arc::new(Mutex::new(ResultsList::new()));
    let controller = SearchController::new(
        backend,
        Arc::clone(&results),
        RenderOptions::from_config(&config.render),
    );
    let dispatcher = SearchDispatcher::new(controller, config.search.sequencing);
    let mut app = App::new(results, config.server.base_url.clone());

    info!(
        base_url = %config.server.base_url,
        sequencing = %dispatcher.sequencing(),
        "starting interactive search"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &mut app, &dispatcher);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(
    terminal: &mut Terminal<CrosstermBackend<B>>,
    app: &mut App,
    dispatcher: &SearchDispatcher<S, ResultsList>,
) -> Result<()>
where
    B: io::Write,
    S: SearchBackend,
{
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match app.handle_key(key) {
                AppCommand::Search(query) => {
                    // Outcomes land in the shared container; nothing to await here.
                    let _pending = dispatcher.submit(query);
                }
                AppCommand::Open(url) => {
                    if let Err(err) = open::that(&url) {
                        warn!(url = %url, error = %err, "could not open link");
                    }
                }
                AppCommand::None => {}
            },
            Event::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                app.input.paste(&normalized);
            }
            _ => {}
        }
    }
}
