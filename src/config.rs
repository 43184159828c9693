//! Configuration for kittyfs.
//!
//! - [load]: config directory resolution, `kittyfs.toml` settings and the persisted theme.
//! - [theme]: the fixed theme registry and the active [ThemeColors] pair.
//! - [input]: key binding lists for the app-level actions.

pub mod input;
pub mod load;
pub mod theme;

pub use input::Keys;
pub use load::{Config, RawConfig, load_theme, save_theme};
pub use theme::{THEMES, ThemeColors};
