//! Input configuration options for kittyfs
//!
//! This module defines the key binding lists which are read from the `[keys]` table of
//! kittyfs.toml. Each logical action takes a list of key strings such as `"q"`,
//! `"Ctrl+c"`, `"<c-c>"` or `"Backspace"`.

use serde::Deserialize;

/// Key bindings of all app-level actions.
///
/// Keys not bound here (cursor movement, filtering, paging) belong to the entry list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    keybind_help: Vec<String>,
    activate: Vec<String>,
    go_parent: Vec<String>,
    cycle_theme: Vec<String>,
    reveal: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(quit, keybind_help, activate, go_parent, cycle_theme, reveal);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["q".into(), "Ctrl+c".into()],
            keybind_help: vec!["?".into()],
            activate: vec!["Enter".into()],
            go_parent: vec!["Backspace".into()],
            cycle_theme: vec!["t".into()],
            reveal: vec!["o".into()],
        }
    }
}
