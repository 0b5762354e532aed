//! Snake - eat apples, grow, avoid the walls and your own tail
//!
//! The board is a grid of square cells. The snake moves one cell per tick
//! in the direction last chosen with the arrow keys. Each apple adds a part
//! and a point; leaving the board or running into the body ends the round.

pub mod config;
mod game;
pub mod snake;

pub use config::SnakeConfig;
pub use game::{SnakeGame, BODY_COLOR};
pub use snake::Snake;
