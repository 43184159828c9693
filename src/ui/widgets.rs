//! Widgets drawn inside the browser panel: the title graphic, the entry list view and
//! the extended help block.

use crate::app::EntryList;
use crate::config::Keys;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// The KITTYFS title graphic.
pub const TITLE_ART: [&str; 3] = [
    "░█▄▀░▀█▀░▀█▀░▀█▀░█░█░█▀▀░█▀▀",
    "░█░█░░█░░░█░░░█░░░█░░█▀▀░▀▀█",
    "░▀░▀░▀▀▀░░▀░░░▀░░░▀░░▀░░░▀▀▀",
];

/// Rows of text in the extended help block.
const EXTENDED_HELP_LINES: usize = 9;

/// Short help shown as the list footer, naming the first key bound to each action.
pub fn short_help(keys: &Keys) -> String {
    format!(
        "↑/↓ files • ←/→ pages • / filter • {} parent • {} more • {} quit",
        first_key(keys.go_parent()),
        first_key(keys.keybind_help()),
        first_key(keys.quit()),
    )
}

/// Extended help, replaces the list footer when expanded.
pub fn extended_help(keys: &Keys) -> [String; EXTENDED_HELP_LINES] {
    let row = |label: String, what: &str| format!("  {label:<14}- {what}");
    [
        format!("Extended Help: ( {} to close )", first_key(keys.keybind_help())),
        row("↑/↓ or j/k".into(), "Navigate up/down"),
        row("←/→ or h/l".into(), "Previous/next page"),
        row(key_label(keys.activate()), "Open file or enter folder"),
        row(key_label(keys.reveal()), "Open location in file explorer"),
        row(key_label(keys.go_parent()), "Go back to parent folder"),
        row("/".into(), "Filter/search items (esc to clear)"),
        row(key_label(keys.cycle_theme()), "Change color theme"),
        row(key_label(keys.quit()), "Quit"),
    ]
}

/// All bindings of an action as help text, e.g. `q or ctrl+c`.
fn key_label(bindings: &[String]) -> String {
    if bindings.is_empty() {
        return "unbound".into();
    }
    bindings
        .iter()
        .map(|k| display_key(k))
        .collect::<Vec<_>>()
        .join(" or ")
}

fn first_key(bindings: &[String]) -> String {
    bindings
        .first()
        .map_or_else(|| "unbound".into(), |k| display_key(k))
}

// named keys read lowercase, single characters keep their case ("G" is not "g")
fn display_key(key: &str) -> String {
    if key.chars().count() > 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}

const HELP_GRAY: Color = Color::Rgb(0x88, 0x88, 0x88);
const DIM: Color = Color::DarkGray;

pub fn title_art_width() -> u16 {
    TITLE_ART
        .iter()
        .map(|l| UnicodeWidthStr::width(*l))
        .max()
        .unwrap_or(0) as u16
}

/// Rows the extended help block takes, padding included.
pub fn extended_help_height() -> u16 {
    EXTENDED_HELP_LINES as u16 + 2
}

pub fn draw_title(frame: &mut Frame, area: Rect, highlight: Color) {
    let style = Style::default().fg(highlight).add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = TITLE_ART
        .iter()
        .map(|l| Line::from(Span::styled(*l, style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draws the entry list: title row, spacer, the current page of items, status line and
/// (unless hidden) the short help bar.
pub fn draw_list(frame: &mut Frame, area: Rect, list: &EntryList, help: &str, highlight: Color) {
    let help_rows = u16::from(list.show_help());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(help_rows),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(title_line(list, highlight)), chunks[0]);

    let selected_style = Style::default().fg(highlight).add_modifier(Modifier::BOLD);
    let page: Vec<_> = list.page_items().collect();
    let rows = usize::from(chunks[2].height);
    // a squeezed list scrolls within the page so the cursor stays on screen
    let start = page
        .iter()
        .position(|(_, selected)| *selected)
        .map_or(0, |pos| (pos + 1).saturating_sub(rows));
    let items: Vec<Line> = page
        .into_iter()
        .skip(start)
        .take(rows)
        .map(|(entry, selected)| {
            if selected {
                Line::from(vec![
                    Span::styled("│ ", Style::default().fg(highlight)),
                    Span::styled(entry.display_name().into_owned(), selected_style),
                ])
            } else {
                Line::from(format!("  {}", entry.display_name()))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(items), chunks[2]);

    let mut status = vec![Span::styled(list.status_line(), Style::default().fg(DIM))];
    if list.total_pages() > 1 {
        status.push(Span::styled(
            format!("  page {}/{}", list.page() + 1, list.total_pages()),
            Style::default().fg(DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[3]);

    if list.show_help() {
        frame.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(DIM))),
            chunks[4],
        );
    }
}

fn title_line(list: &EntryList, highlight: Color) -> Line<'static> {
    if list.is_filtering() {
        return Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(highlight)),
            Span::raw(list.filter().to_string()),
            Span::styled("█", Style::default().fg(highlight)),
        ]);
    }
    Line::from(Span::styled(
        format!(" {} ", list.title()),
        Style::default()
            .fg(Color::Black)
            .bg(highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn draw_extended_help(frame: &mut Frame, area: Rect, keys: &Keys) {
    let lines: Vec<Line> = extended_help(keys).into_iter().map(Line::raw).collect();
    let help = Paragraph::new(lines)
        .style(Style::default().fg(HELP_GRAY))
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_read_as_before() {
        let keys = Keys::default();
        assert_eq!(
            short_help(&keys),
            "↑/↓ files • ←/→ pages • / filter • backspace parent • ? more • q quit"
        );

        let help = extended_help(&keys);
        assert_eq!(help[0], "Extended Help: ( ? to close )");
        assert_eq!(help[3], "  enter         - Open file or enter folder");
        assert_eq!(help[8], "  q or ctrl+c   - Quit");
    }

    #[test]
    fn rebound_keys_show_up_in_help() -> Result<(), toml::de::Error> {
        let keys: Keys = toml::from_str(
            r#"
            quit = ["x"]
            go_parent = ["Left", "u"]
            reveal = []
            "#,
        )?;
        assert!(short_help(&keys).ends_with("left parent • ? more • x quit"));

        let help = extended_help(&keys);
        assert_eq!(help[4], "  unbound       - Open location in file explorer");
        assert_eq!(help[5], "  left or u     - Go back to parent folder");
        assert_eq!(help[8], "  x             - Quit");
        Ok(())
    }
}
