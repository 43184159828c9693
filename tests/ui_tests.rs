//! UI-related tests for kittyfs
//!
//! These render the app into ratatui's TestBackend and check what ends up on screen.

use kittyfs::app::{AppEvent, AppState};
use kittyfs::config::{Config, RawConfig, ThemeColors};
use kittyfs::core::{Entry, ListingProvider};
use kittyfs::ui::{self, widgets};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use std::error;
use std::path::{Path, PathBuf};

struct OneDir;

impl ListingProvider for OneDir {
    fn list_entries(&self, path: &Path) -> Vec<Entry> {
        vec![
            Entry::new("Pictures", true, path.join("Pictures")),
            Entry::new("todo.md", false, path.join("todo.md")),
        ]
    }
}

fn screen(app: &AppState, width: u16, height: u16) -> Result<Vec<String>, Box<dyn error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| ui::render(f, app))?;

    let buffer = terminal.backend().buffer();
    let rows = buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect();
    Ok(rows)
}

fn app() -> AppState {
    AppState::new(
        &Config::default(),
        vec![Entry::root("/"), Entry::root("/mnt/usb")],
        ThemeColors::default(),
    )
}

#[test]
fn drive_select_screen() -> Result<(), Box<dyn error::Error>> {
    let mut app = app();
    app.handle_event(AppEvent::Resize { width: 100, height: 30 }, &OneDir);
    let rows = screen(&app, 100, 30)?;
    let all = rows.join("\n");

    assert!(all.contains(widgets::TITLE_ART[0]));
    assert!(all.contains("Select Drive =^..^="));
    assert!(all.contains("│ /"));
    assert!(all.contains("/mnt/usb/"));
    assert!(all.contains("2 items"));
    assert!(all.contains("backspace parent"));

    // rounded border starts centered: (100 - 86) / 2
    assert!(rows[0].starts_with(&format!("{}╭", " ".repeat(7))));
    Ok(())
}

#[test]
fn browsing_screen_and_extended_help() -> Result<(), Box<dyn error::Error>> {
    let mut app = app();
    app.handle_event(AppEvent::Resize { width: 100, height: 40 }, &OneDir);
    app.handle_event(AppEvent::Activate, &OneDir);
    app.handle_event(AppEvent::ToggleHelp, &OneDir);

    let all = screen(&app, 100, 40)?.join("\n");
    assert!(all.contains("Browsing /"));
    assert!(all.contains("Pictures/"));
    assert!(all.contains("todo.md"));
    assert!(all.contains("Extended Help"));
    assert!(!all.contains("backspace parent"));
    Ok(())
}

#[test]
fn help_follows_rebound_keys() -> Result<(), Box<dyn error::Error>> {
    let raw: RawConfig = toml::from_str("[keys]\nquit = [\"x\"]\ngo_parent = [\"u\"]\n")?;
    let config = Config::from_raw(raw, PathBuf::from("."));
    let mut app = AppState::new(&config, vec![Entry::root("/")], ThemeColors::default());
    app.handle_event(AppEvent::Resize { width: 100, height: 40 }, &OneDir);

    let all = screen(&app, 100, 40)?.join("\n");
    assert!(all.contains("u parent"));
    assert!(all.contains("x quit"));
    assert!(!all.contains("q quit"));

    app.handle_event(AppEvent::ToggleHelp, &OneDir);
    let all = screen(&app, 100, 40)?.join("\n");
    assert!(all.contains("  x             - Quit"));
    Ok(())
}

#[test]
fn border_uses_theme_color() -> Result<(), Box<dyn error::Error>> {
    let app = AppState::new(
        &Config::default(),
        vec![Entry::root("/")],
        ThemeColors::new("#00CED1", "#00FFFF"),
    );
    let mut terminal = Terminal::new(TestBackend::new(90, 40))?;
    terminal.draw(|f| ui::render(f, &app))?;

    let corner = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .find(|c| c.symbol() == "╭")
        .ok_or("no border corner")?;
    assert_eq!(corner.fg, Color::Rgb(0x00, 0xCE, 0xD1));
    Ok(())
}

#[test]
fn tiny_terminal_does_not_panic() -> Result<(), Box<dyn error::Error>> {
    let mut app = app();
    app.handle_event(AppEvent::Resize { width: 10, height: 4 }, &OneDir);
    app.handle_event(AppEvent::ToggleHelp, &OneDir);
    let rows = screen(&app, 10, 4)?;
    assert_eq!(rows.len(), 4);
    Ok(())
}
