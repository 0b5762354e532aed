//! Arcade Term - run arcade-core games in a terminal
//!
//! Frames are rasterised into a pixel buffer drawn with half-block
//! characters, so every terminal cell shows two vertically stacked pixels.
//! The world is scaled to fit the window and letterboxed.
//!
//! - [`run`] owns the terminal and drives a [`arcade_core::Game`] at its tick rate
//! - [`InputPump`] turns crossterm events into key presses and releases
//! - [`GameArgs`] and [`init_logging`] give every binary the same flags and logs

pub mod cli;
pub mod input;
pub mod logging;
mod runner;
pub mod surface;

pub use cli::GameArgs;
pub use input::{Control, HoldTimeouts, InputPump};
pub use logging::{init_logging, Verbosity};
pub use runner::{run, RunOptions, RunSummary};
pub use surface::{Surface, TextSpan, Viewport};
