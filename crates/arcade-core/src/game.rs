//! The contract between a game and its frontend

use crate::{Frame, KeyEvent};
use std::fmt;
use std::time::Duration;

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// Something noteworthy that happened during input handling or a tick.
///
/// Frontends use these for logging; games use them in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new entity entered the world (`"cactus"`, `"alien"`, `"apple"`)
    Spawned(&'static str),
    /// Points were awarded
    Scored { points: u32, total: u32 },
    /// The player character left the ground
    Jumped,
    /// A projectile was fired
    Fired,
    /// The game ended
    GameOver { score: u32 },
    /// The game was reset to its initial state
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Spawned(what) => write!(f, "spawned {}", what),
            GameEvent::Scored { points, total } => write!(f, "+{} (total {})", points, total),
            GameEvent::Jumped => write!(f, "jumped"),
            GameEvent::Fired => write!(f, "fired"),
            GameEvent::GameOver { score } => write!(f, "game over with score {}", score),
            GameEvent::Restarted => write!(f, "restarted"),
        }
    }
}

/// A fixed-timestep game.
///
/// The frontend calls [`Game::on_key`] for every key event, [`Game::update`]
/// once per elapsed [`Game::tick_interval`], and [`Game::view`] whenever it
/// renders. `update` does nothing once the game is over, so the last scene
/// stays frozen behind the game-over message until a restart.
pub trait Game {
    /// Window title
    fn title(&self) -> &str;

    /// World size in pixels (width, height)
    fn size(&self) -> (i32, i32);

    /// Time between two ticks
    fn tick_interval(&self) -> Duration;

    fn status(&self) -> GameStatus;

    fn score(&self) -> u32;

    /// React to a key transition
    fn on_key(&mut self, event: KeyEvent) -> Vec<GameEvent>;

    /// Advance the world by one tick
    fn update(&mut self) -> Vec<GameEvent>;

    /// Describe the current scene
    fn view(&self, frame: &mut Frame);

    /// Back to the initial state
    fn restart(&mut self);
}
