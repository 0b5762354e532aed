//! Mars Attacks - shoot the aliens before they land
//!
//! Aliens drop from the top of the screen at a steady rate. The ship at the
//! bottom slides with the arrow keys and fires with Space; each alien shot
//! is worth ten points. An alien reaching the ground or the ship ends the
//! round.

pub mod config;
pub mod entities;
mod game;

pub use config::MarsConfig;
pub use entities::{Alien, Bullet, Player};
pub use game::{MarsGame, Steering};
