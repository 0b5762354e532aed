//! Arcade Core - shared building blocks for small fixed-timestep games
//!
//! This crate provides everything a game needs that is not tied to a
//! particular output device:
//! - Integer geometry with AABB intersection (`Rect`, `Point`)
//! - Deterministic RNG (`GameRng`)
//! - Tick-based time and a fixed-step accumulator (`Clock`, `FixedStep`)
//! - Frames of draw commands (`Frame`, `DrawCmd`, `Color`)
//! - Key events and grid directions (`KeyEvent`, `Key`, `Direction`)
//! - The `Game` trait every game implements
//! - RON configuration loading
//!
//! Games never touch the terminal. A frontend feeds them `KeyEvent`s, calls
//! [`Game::update`] once per tick and presents the `Frame` filled by
//! [`Game::view`].

pub mod canvas;
pub mod config;
mod error;
mod game;
mod geom;
mod input;
mod rng;
pub mod time;

pub use canvas::{Color, DrawCmd, Frame, TextAlign, TextSize};
pub use error::{Error, Result};
pub use game::{Game, GameEvent, GameStatus};
pub use geom::{Point, Rect};
pub use input::{Direction, Key, KeyAction, KeyEvent};
pub use rng::{seed_from_time, GameRng};
pub use time::{Clock, FixedStep, Tick};
