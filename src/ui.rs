//! Terminal UI of kittyfs.
//!
//! - [render]: the frame entry point and panel placement.
//! - [widgets]: title graphic, entry list view and help blocks.

pub mod render;
pub mod widgets;

pub use render::render;
