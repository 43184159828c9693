//! The main config loading module for kittyfs.
//!
//! Two files live in the config directory:
//! - `kittyfs.toml`: user settings (key bindings), parsed into [RawConfig] and then [Config].
//! - `theme.json`: the persisted [ThemeColors], rewritten after every theme change.
//!
//! Neither file is required. Anything missing or malformed falls back to internal defaults.

use crate::config::{Keys, ThemeColors};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const SETTINGS_FILE: &str = "kittyfs.toml";
pub const THEME_FILE: &str = "theme.json";

/// Raw configuration as read from the toml file
/// It is converted into the main [Config] struct once the config directory is known.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    keys: Keys,
}

/// Main configuration struct for kittyfs
#[derive(Debug, Clone)]
pub struct Config {
    keys: Keys,
    dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keys: Keys::default(),
            dir: Config::default_dir(),
        }
    }
}

impl Config {
    pub fn from_raw(raw: RawConfig, dir: PathBuf) -> Self {
        Config {
            keys: raw.keys,
            dir,
        }
    }

    /// Load configuration from the default directory.
    /// If the settings file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point before the terminal is taken over, so notices go to stderr.
    pub fn load() -> Self {
        let dir = Self::default_dir();
        let path = dir.join(SETTINGS_FILE);

        if !path.exists() {
            return Config::from_raw(RawConfig::default(), dir);
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => Config::from_raw(raw, dir),
                Err(e) => {
                    eprintln!("[kittyfs] Error parsing {}: {}", path.display(), e);
                    Config::from_raw(RawConfig::default(), dir)
                }
            },
            Err(_) => Config::from_raw(RawConfig::default(), dir),
        }
    }

    // Getters

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn theme_path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }

    /// Determine the default configuration directory.
    /// Checks the KITTYFS_CONFIG_DIR environment variable first,
    /// then XDG_CONFIG_HOME, then the platform config dir,
    /// and falls back to the current directory.
    pub fn default_dir() -> PathBuf {
        if let Ok(path) = std::env::var("KITTYFS_CONFIG_DIR")
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return PathBuf::from(xdg_config).join("kittyfs");
        }

        if let Some(config) = dirs::config_dir() {
            return config.join("kittyfs");
        }
        PathBuf::from(".")
    }

    /// Generate a default settings file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)
    }
}

const DEFAULT_SETTINGS: &str = r##"# kittyfs.toml - settings for kittyfs
#
# Key strings: single characters ("q"), named keys ("Enter", "Backspace", "Esc",
# "Up", "Tab", "F1"), and modifiers ("Ctrl+c", "Alt+x", "<c-c>").
# Cursor movement, paging and filtering keys belong to the list and are not remappable.
# The help bar and the extended help (?) show whatever is bound here.

[keys]
quit = ["q", "Ctrl+c"]
keybind_help = ["?"]
activate = ["Enter"]
go_parent = ["Backspace"]
cycle_theme = ["t"]
reveal = ["o"]
"##;

/// Reads the persisted theme.
///
/// A missing file, an unreadable file or anything that is not the expected JSON object
/// yields the default pair.
pub fn load_theme(path: &Path) -> ThemeColors {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Writes the theme as pretty printed JSON, creating the config directory if needed.
pub fn save_theme(path: &Path, theme: &ThemeColors) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(theme)?;
    fs::write(path, data)
}
