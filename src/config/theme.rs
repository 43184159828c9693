//! Theme registry for kittyfs
//!
//! A fixed, ordered palette of (border, highlight) pairs which the user cycles through.
//! Only the resulting pair is persisted (see [crate::config::load]), the registry itself
//! is compiled in.

use crate::utils::parse_color;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Border color used when nothing has been persisted yet.
pub const DEFAULT_BORDER: &str = "#FF69B4";
/// Highlight color used when nothing has been persisted yet.
pub const DEFAULT_HIGHLIGHT: &str = "#FF1493";

/// A single entry of the theme registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub border: &'static str,
    pub highlight: &'static str,
}

const fn palette(name: &'static str, border: &'static str, highlight: &'static str) -> Palette {
    Palette {
        name,
        border,
        highlight,
    }
}

/// The registry, in cycling order.
#[rustfmt::skip]
pub const THEMES: [Palette; 15] = [
    palette("hot-pink",      "#FF69B4", "#FF1493"),
    palette("turquoise",     "#00CED1", "#00FFFF"),
    palette("purple",        "#9370DB", "#BA55D3"),
    palette("tomato",        "#FF6347", "#FF4500"),
    palette("lime",          "#32CD32", "#7FFF00"),
    palette("gold",          "#FFD700", "#FFA500"),
    palette("royal-blue",    "#4169E1", "#1E90FF"),
    palette("deep-pink",     "#FF1493", "#FF69B4"),
    palette("spring-green",  "#00FA9A", "#00FF7F"),
    palette("dark-orange",   "#FF8C00", "#FF6347"),
    palette("blue-violet",   "#8A2BE2", "#9400D3"),
    palette("crimson",       "#DC143C", "#FF0000"),
    palette("deep-sky-blue", "#00BFFF", "#87CEEB"),
    palette("green-yellow",  "#ADFF2F", "#FFFF00"),
    palette("magenta",       "#FF00FF", "#DA70D6"),
];

/// The active color pair, exactly as persisted.
///
/// Colors outside the registry are kept as-is so a hand edited config still displays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    border_color: String,
    highlight_color: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        ThemeColors::new(DEFAULT_BORDER, DEFAULT_HIGHLIGHT)
    }
}

impl From<Palette> for ThemeColors {
    fn from(p: Palette) -> Self {
        ThemeColors::new(p.border, p.highlight)
    }
}

impl ThemeColors {
    pub fn new(border: impl Into<String>, highlight: impl Into<String>) -> Self {
        ThemeColors {
            border_color: border.into(),
            highlight_color: highlight.into(),
        }
    }

    #[inline]
    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    #[inline]
    pub fn highlight_color(&self) -> &str {
        &self.highlight_color
    }

    pub fn border(&self) -> Color {
        parse_color(&self.border_color)
    }

    pub fn highlight(&self) -> Color {
        parse_color(&self.highlight_color)
    }

    /// Position of this pair's border color in [THEMES], if it is a registry color.
    pub fn registry_index(&self) -> Option<usize> {
        THEMES
            .iter()
            .position(|t| t.border.eq_ignore_ascii_case(&self.border_color))
    }

    /// Registry name of this pair, `None` for a hand edited color.
    pub fn palette_name(&self) -> Option<&'static str> {
        self.registry_index().map(|idx| THEMES[idx].name)
    }

    /// The registry entry after this one, wrapping at the end.
    ///
    /// A border color missing from the registry counts as index 0, so the first cycle
    /// from a hand edited config lands on the second registry entry.
    pub fn next(&self) -> ThemeColors {
        let idx = self.registry_index().unwrap_or(0);
        THEMES[(idx + 1) % THEMES.len()].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_registry_entry() {
        let theme = ThemeColors::default();
        assert_eq!(theme.registry_index(), Some(0));
        assert_eq!(theme, ThemeColors::from(THEMES[0]));
        assert_eq!(theme.border(), Color::Rgb(0xFF, 0x69, 0xB4));
    }

    #[test]
    fn cycling_full_registry_returns_to_start() {
        let start = ThemeColors::from(THEMES[4]);
        let mut theme = start.clone();
        for _ in 0..THEMES.len() {
            theme = theme.next();
        }
        assert_eq!(theme, start);
    }

    #[test]
    fn next_wraps_at_end() {
        let last = ThemeColors::from(THEMES[THEMES.len() - 1]);
        assert_eq!(last.next(), ThemeColors::from(THEMES[0]));
    }

    #[test]
    fn unknown_border_falls_back_to_index_zero() {
        let custom = ThemeColors::new("#123456", "#654321");
        assert_eq!(custom.registry_index(), None);
        assert_eq!(custom.next(), ThemeColors::from(THEMES[1]));
    }

    #[test]
    fn lowercase_hex_still_matches() {
        let theme = ThemeColors::new("#00ced1", "#00ffff");
        assert_eq!(theme.registry_index(), Some(1));
        assert_eq!(theme.next(), ThemeColors::from(THEMES[2]));
    }

    #[test]
    fn palette_names() {
        assert_eq!(ThemeColors::default().palette_name(), Some("hot-pink"));
        assert_eq!(ThemeColors::from(THEMES[11]).palette_name(), Some("crimson"));
        assert_eq!(ThemeColors::new("#123456", "#654321").palette_name(), None);
    }

    #[test]
    fn deep_pink_is_matched_by_border_only() {
        // hot-pink and deep-pink share colors in swapped roles
        let deep = ThemeColors::from(THEMES[7]);
        assert_eq!(deep.registry_index(), Some(7));
    }
}
