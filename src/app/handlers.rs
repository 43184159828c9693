//! Transition handlers for kittyfs.
//!
//! This module implements the [AppState] transition function: one [AppEvent] in, state
//! mutated, a list of [Effect]s out.

use crate::app::layout::{self, TerminalSize};
use crate::app::state::{AppEvent, AppState, DRIVE_SELECT_TITLE, Effect, Mode};
use crate::core::{Entry, ListingProvider, MIN_ROOT_PATH_LEN};
use crate::utils::readable_path;

use std::path::{Path, PathBuf};

impl AppState {
    /// Runs one event through the state machine.
    ///
    /// Listing goes through `fs` and never fails (an unreadable directory lists as empty).
    /// Everything else that touches the outside world is returned as an [Effect].
    pub fn handle_event(&mut self, event: AppEvent, fs: &impl ListingProvider) -> Vec<Effect> {
        match event {
            AppEvent::Resize { width, height } => {
                self.terminal = TerminalSize { width, height };
                self.resize_list();
                Vec::new()
            }
            AppEvent::ToggleHelp => {
                self.help_expanded = !self.help_expanded;
                self.list.set_show_help(!self.help_expanded);
                Vec::new()
            }
            AppEvent::Quit => vec![Effect::Quit],
            AppEvent::Activate => self.handle_activate(fs),
            AppEvent::GoToParent => {
                self.handle_go_parent(fs);
                Vec::new()
            }
            AppEvent::CycleTheme => {
                self.theme = self.theme.next();
                vec![Effect::SaveTheme(self.theme.clone())]
            }
            AppEvent::Reveal => self.handle_reveal(),
            AppEvent::Forward(key) => {
                self.list.handle_key(key);
                Vec::new()
            }
        }
    }

    fn handle_activate(&mut self, fs: &impl ListingProvider) -> Vec<Effect> {
        let Some(selected) = self.list.selected_item() else {
            return Vec::new();
        };

        if self.is_drive_select() || selected.is_dir() {
            let path = selected.path().to_path_buf();
            self.enter_dir(path, fs);
            Vec::new()
        } else {
            vec![Effect::Open(selected.path().to_path_buf())]
        }
    }

    fn handle_go_parent(&mut self, fs: &impl ListingProvider) {
        let Mode::Browsing(current) = &self.mode else {
            return;
        };

        // a root is the top even when it has a dirname (mount points)
        if self.roots.iter().any(|root| root.path() == current) {
            self.enter_drive_select();
            return;
        }

        match parent_below_root(current) {
            Some(parent) => self.enter_dir(parent, fs),
            None => self.enter_drive_select(),
        }
    }

    fn handle_reveal(&self) -> Vec<Effect> {
        if self.is_drive_select() {
            return Vec::new();
        }
        let Some(selected) = self.list.selected_item() else {
            return Vec::new();
        };

        let target = if selected.is_dir() {
            selected.path().to_path_buf()
        } else {
            selected
                .path()
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(selected.path())
                .to_path_buf()
        };
        vec![Effect::Reveal(target)]
    }

    /// Lists `path` and makes it the browsed directory.
    fn enter_dir(&mut self, path: PathBuf, fs: &impl ListingProvider) {
        let entries = fs.list_entries(&path);
        self.list.set_title(format!("Browsing {}", readable_path(&path)));
        self.mode = Mode::Browsing(path);
        self.replace_entries(entries);
    }

    fn enter_drive_select(&mut self) {
        self.list.set_title(DRIVE_SELECT_TITLE);
        self.mode = Mode::DriveSelect;
        self.replace_entries(self.roots.clone());
    }

    fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.list.reset_filter();
        self.list.set_items(entries);
        self.resize_list();
    }

    fn resize_list(&mut self) {
        let longest = layout::longest_name_width(self.list.items());
        self.dims = layout::list_dimensions(self.terminal, longest);
        self.list.set_size(self.dims.width, self.dims.height);
    }
}

/// The directory above `current`, or `None` if `current` is already the top of a root.
///
/// A path counts as the top when it has no parent, its parent is empty or itself, or it
/// is no longer than the shortest root path of the platform.
pub fn parent_below_root(current: &Path) -> Option<PathBuf> {
    if current.as_os_str().len() <= MIN_ROOT_PATH_LEN {
        return None;
    }
    current
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty() && *parent != current)
        .map(Path::to_path_buf)
}
