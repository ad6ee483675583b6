//! mz-cli: terminal front-end for mz-core
//!
//! Turns a maze grid into text frames. The `maze` binary wires this to the
//! command line.

pub mod display;
pub mod render;

pub use display::{GlyphSet, GraphicsMode};
pub use render::{render, status_line};
