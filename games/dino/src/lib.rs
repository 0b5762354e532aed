//! Dino - jump over the cacti
//!
//! A dinosaur stands on the ground while cacti of random size scroll in from
//! the right at random intervals. Space jumps; touching a cactus ends the run
//! and R starts over.

pub mod config;
pub mod entities;
mod game;

pub use config::DinoConfig;
pub use entities::{Cactus, Dinosaur};
pub use game::{DinoGame, GAME_OVER_MESSAGE};
