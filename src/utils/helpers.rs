//! Helpers for kittyfs.
//!
//! - Color parsing from color names or hex codes
//! - Display formatting of paths for list titles

use ratatui::style::Color;
use std::path::Path;

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.trim().to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        lowered => {
            if let Some(color) = lowered.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => Some(color.to_string()),
                    3 => Some(color.chars().flat_map(|c| [c, c]).collect()),
                    _ => None,
                };
                if let Some(rgb) = expanded.and_then(|hex| u32::from_str_radix(&hex, 16).ok()) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Path as shown in list titles. Strips the verbatim prefix on windows.
pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#FF69B4"), Color::Rgb(255, 105, 180));
        assert_eq!(parse_color("#ff69b4"), Color::Rgb(255, 105, 180));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Cyan"), Color::Cyan);
    }

    #[test]
    fn invalid_colors_reset() {
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("#GGGGGG"), Color::Reset);
        assert_eq!(parse_color("chartreuse-ish"), Color::Reset);
    }

    #[cfg(not(windows))]
    #[test]
    fn readable_path_is_display() {
        assert_eq!(readable_path(Path::new("/home/user")), "/home/user");
    }
}
