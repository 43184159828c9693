//! Viewport sizing for the entry list.
//!
//! The list is as wide as the longest entry name needs (never narrower than the help bar)
//! and as tall as the terminal allows once the panel chrome is taken off, with a floor.

use crate::core::Entry;
use unicode_width::UnicodeWidthStr;

/// Columns added to the longest name for the selection gutter and list styling.
pub const NAME_BUFFER: u16 = 10;
/// Narrowest list that still fits the help bar.
pub const MIN_HELP_WIDTH: u16 = 80;
/// Rows used by the panel border and the title graphic.
pub const BORDER_OVERHEAD: u16 = 6;
/// Vertical padding inside the panel border, applied top and bottom.
pub const PADDING_Y: u16 = 1;
/// Horizontal padding inside the panel border, applied left and right.
pub const PADDING_X: u16 = 2;
/// The list never gets fewer rows than this.
pub const MIN_CONTENT_HEIGHT: u16 = 10;

/// Terminal size assumed until the first resize event arrives.
pub const DEFAULT_TERMINAL: TerminalSize = TerminalSize {
    width: 80,
    height: 38,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

/// Size of the entry list, always derived from the terminal and the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDimensions {
    pub width: u16,
    pub height: u16,
}

/// Display width of the longest entry name, recomputed from scratch for every entry set.
pub fn longest_name_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.name()))
        .max()
        .unwrap_or(0)
}

/// Computes the list dimensions for a terminal size and the longest visible name.
pub fn list_dimensions(terminal: TerminalSize, longest_name: usize) -> ListDimensions {
    let name_width = u16::try_from(longest_name)
        .unwrap_or(u16::MAX)
        .saturating_add(NAME_BUFFER);

    let content_height = terminal
        .height
        .saturating_sub(BORDER_OVERHEAD + 2 * PADDING_Y);

    ListDimensions {
        width: name_width.max(MIN_HELP_WIDTH),
        height: content_height.max(MIN_CONTENT_HEIGHT),
    }
}
