//! Core runtime logic for kittyfs.
//!
//! This module contains the non-UI pieces used by the application:
//! - [fm]: directory listing and root enumeration (see [Entry], [ListingProvider]).
//! - [proc]: fire-and-forget launches of the platform opener and file manager.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod fm;
pub mod proc;
pub mod terminal;

pub use fm::{Entry, FsListing, ListingProvider, MIN_ROOT_PATH_LEN, browse_dir, list_roots};
pub use proc::{open_default, reveal_in_file_manager};
