//! Miscellaneous utility functions for kittyfs.
//!
//! - [helpers]: color parsing and path display.
//! - [cli]: command line argument handling.

pub mod cli;
pub mod helpers;

pub use helpers::{parse_color, readable_path};
