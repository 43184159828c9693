//! Application state of kittyfs.
//!
//! [AppState] is the single mutable model of the browser: the current [Mode] (drive
//! selection or browsing a directory), the root entries, the embedded [EntryList], the
//! active theme, terminal and list sizes, and whether the extended help is expanded.
//!
//! Input is fed in as [AppEvent]s. Transitions (see `handlers.rs`) mutate the state and
//! return [Effect]s which the caller executes: file launches, theme persistence, quitting.
//! Directory listing is the only outside call made during a transition, through the
//! [ListingProvider] passed in.

use crate::app::keymap::{Keymap, is_interrupt};
use crate::app::layout::{self, DEFAULT_TERMINAL, ListDimensions, TerminalSize};
use crate::app::list::EntryList;
use crate::config::{Config, Keys, ThemeColors};
use crate::core::{Entry, ListingProvider};

use crossterm::event::KeyEvent;
use std::path::{Path, PathBuf};

/// Title of the list on the drive selection screen.
pub const DRIVE_SELECT_TITLE: &str = "Select Drive =^..^=";

/// Which entry set and transitions are active.
///
/// The browsed path lives inside the variant, so a path without browsing (or the other
/// way round) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    DriveSelect,
    Browsing(PathBuf),
}

/// Logical input events driving the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Resize { width: u16, height: u16 },
    ToggleHelp,
    Quit,
    Activate,
    GoToParent,
    CycleTheme,
    Reveal,
    /// Anything else, handed to the entry list as is.
    Forward(KeyEvent),
}

/// Side effects requested by a transition, executed by the caller in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a file with the platform default handler.
    Open(PathBuf),
    /// Show a directory in the platform file manager.
    Reveal(PathBuf),
    /// Persist the theme pair.
    SaveTheme(ThemeColors),
    Quit,
}

/// Main struct which holds the central application state of kittyfs
pub struct AppState {
    pub(super) keymap: Keymap,
    pub(super) keys: Keys,
    pub(super) mode: Mode,
    pub(super) roots: Vec<Entry>,
    pub(super) list: EntryList,
    pub(super) theme: ThemeColors,
    pub(super) terminal: TerminalSize,
    pub(super) dims: ListDimensions,
    pub(super) help_expanded: bool,
}

impl AppState {
    /// Builds the initial state: drive selection over `roots`, sized for the default
    /// terminal until the first resize arrives.
    pub fn new(config: &Config, roots: Vec<Entry>, theme: ThemeColors) -> Self {
        let dims = layout::list_dimensions(DEFAULT_TERMINAL, layout::longest_name_width(&roots));
        let mut list = EntryList::new(roots.clone(), dims.width, dims.height);
        list.set_title(DRIVE_SELECT_TITLE);

        AppState {
            keymap: Keymap::from_config(config),
            keys: config.keys().clone(),
            mode: Mode::DriveSelect,
            roots,
            list,
            theme,
            terminal: DEFAULT_TERMINAL,
            dims,
            help_expanded: false,
        }
    }

    // Getters/ accessors

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn is_drive_select(&self) -> bool {
        self.mode == Mode::DriveSelect
    }

    /// The browsed directory, `None` on the drive selection screen.
    pub fn current_path(&self) -> Option<&Path> {
        match &self.mode {
            Mode::DriveSelect => None,
            Mode::Browsing(path) => Some(path),
        }
    }

    #[inline]
    pub fn roots(&self) -> &[Entry] {
        &self.roots
    }

    /// The entries backing the list, unfiltered.
    #[inline]
    pub fn visible_entries(&self) -> &[Entry] {
        self.list.items()
    }

    /// The configured bindings, for help text.
    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    #[inline]
    pub fn list(&self) -> &EntryList {
        &self.list
    }

    #[inline]
    pub fn theme(&self) -> &ThemeColors {
        &self.theme
    }

    #[inline]
    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal
    }

    #[inline]
    pub fn list_dimensions(&self) -> ListDimensions {
        self.dims
    }

    #[inline]
    pub fn help_expanded(&self) -> bool {
        self.help_expanded
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.list.title()
    }

    /// Translates a key press into an event and runs it.
    ///
    /// While the list is taking filter input, every key except the interrupt goes to the
    /// list so app bindings do not eat query characters.
    pub fn handle_key(&mut self, key: KeyEvent, fs: &impl ListingProvider) -> Vec<Effect> {
        let event = if self.list.is_filtering() && !is_interrupt(&key) {
            AppEvent::Forward(key)
        } else {
            self.keymap
                .lookup(key)
                .map(AppEvent::from)
                .unwrap_or(AppEvent::Forward(key))
        };
        self.handle_event(event, fs)
    }
}
