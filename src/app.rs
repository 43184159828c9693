//! Application layer of kittyfs.
//!
//! - [state]: the [AppState] model, [AppEvent] input and [Effect] output types.
//! - handlers: the transition function, implemented on [AppState].
//! - [layout]: viewport sizing of the entry list.
//! - [list]: the embedded [EntryList] with cursor, paging and filtering.
//! - [keymap]: key events to app-level actions.

mod handlers;
pub mod keymap;
pub mod layout;
pub mod list;
pub mod state;

pub use handlers::parent_below_root;
pub use layout::{ListDimensions, TerminalSize};
pub use list::{EntryList, FilterState};
pub use state::{AppEvent, AppState, DRIVE_SELECT_TITLE, Effect, Mode};
