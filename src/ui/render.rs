//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! helper that places the browser panel on screen.
//!
//! This module stays "pure rendering": it reads the app state and produces widgets,
//! without owning any navigation logic.

use crate::app::AppState;
use crate::app::layout::{PADDING_X, PADDING_Y};
use crate::ui::widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Padding},
};

/// Render function which draws the whole browser panel on each frame.
///
/// Layout inside the rounded border, top to bottom: the title graphic, a spacer line,
/// the entry list and, when expanded, the extended help block. When the terminal is too
/// short for all of it the list gives up rows first.
pub fn render(frame: &mut Frame, app: &AppState) {
    let theme = app.theme();
    let border_color = theme.border();
    let highlight = theme.highlight();
    let dims = app.list_dimensions();

    let help_height = if app.help_expanded() {
        widgets::extended_help_height()
    } else {
        0
    };

    let inner_width = dims.width.max(widgets::title_art_width());
    let panel_width = inner_width.saturating_add(2 * (PADDING_X + 1));
    let panel_height = (widgets::TITLE_ART.len() as u16 + 1)
        .saturating_add(dims.height)
        .saturating_add(help_height)
        .saturating_add(2 * (PADDING_Y + 1));
    let panel = panel_area(frame.area(), panel_width, panel_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::new(PADDING_X, PADDING_X, PADDING_Y, PADDING_Y));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(widgets::TITLE_ART.len() as u16),
            Constraint::Length(1),
            Constraint::Max(dims.height),
            Constraint::Length(help_height),
        ])
        .split(inner);

    widgets::draw_title(frame, chunks[0], highlight);
    widgets::draw_list(
        frame,
        chunks[2],
        app.list(),
        &widgets::short_help(app.keys()),
        highlight,
    );
    if app.help_expanded() {
        widgets::draw_extended_help(frame, chunks[3], app.keys());
    }
}

/// Places a panel of the wanted size horizontally centered at the top of `area`,
/// clipped to it.
pub fn panel_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let left = area.width.saturating_sub(width) / 2;
    Rect {
        x: area.x + left,
        y: area.y,
        width,
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_centered_and_clipped() {
        let area = Rect::new(0, 0, 120, 40);
        let panel = panel_area(area, 86, 50);
        assert_eq!(panel, Rect::new(17, 0, 86, 40));

        let narrow = panel_area(Rect::new(0, 0, 60, 20), 86, 10);
        assert_eq!(narrow, Rect::new(0, 0, 60, 10));
    }
}
