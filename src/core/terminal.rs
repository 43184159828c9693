//! Terminal rendering and event loop for kittyfs.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws, and hands key
//! and resize events to the app state. Effects returned by the state machine are
//! executed here, one event at a time.

use crate::app::{AppEvent, AppState, Effect};
use crate::config::{Config, save_theme};
use crate::core::{FsListing, open_default, reveal_in_file_manager};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit.
/// Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal(app: &mut AppState, config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop: draws, blocks for the next event, runs it through the app.
/// Returns on quit
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    config: &Config,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    let listing = FsListing;

    let size = terminal.size()?;
    app.handle_event(
        AppEvent::Resize {
            width: size.width,
            height: size.height,
        },
        &listing,
    );

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let effects = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, &listing),
            Event::Resize(width, height) => {
                app.handle_event(AppEvent::Resize { width, height }, &listing)
            }
            _ => continue,
        };

        if run_effects(effects, config) {
            break;
        }
    }
    Ok(())
}

/// Executes effects in order. Returns `true` once a quit was requested.
///
/// Launch and save failures are dropped: nothing is shown to the user for them.
fn run_effects(effects: Vec<Effect>, config: &Config) -> bool {
    for effect in effects {
        match effect {
            Effect::Open(path) => {
                let _ = open_default(&path);
            }
            Effect::Reveal(path) => {
                let _ = reveal_in_file_manager(&path);
            }
            Effect::SaveTheme(theme) => {
                let _ = save_theme(&config.theme_path(), &theme);
            }
            Effect::Quit => return true,
        }
    }
    false
}
