//! Keyboard input as seen by games

use serde::{Deserialize, Serialize};

/// A key relevant to the games
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Escape,
    /// Any printable character (letters are passed through unchanged)
    Char(char),
    /// Anything else
    Other,
}

impl Key {
    /// Check for a letter key ignoring case
    pub fn is_letter(&self, letter: char) -> bool {
        match self {
            Key::Char(c) => c.eq_ignore_ascii_case(&letter),
            _ => false,
        }
    }
}

/// What happened to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Press,
    /// Auto-repeat while held
    Repeat,
    Release,
}

/// A key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn new(key: Key, action: KeyAction) -> Self {
        Self { key, action }
    }

    pub fn press(key: Key) -> Self {
        Self::new(key, KeyAction::Press)
    }

    pub fn repeat(key: Key) -> Self {
        Self::new(key, KeyAction::Repeat)
    }

    pub fn release(key: Key) -> Self {
        Self::new(key, KeyAction::Release)
    }

    /// Press or auto-repeat
    pub fn is_press(&self) -> bool {
        matches!(self.action, KeyAction::Press | KeyAction::Repeat)
    }

    pub fn is_release(&self) -> bool {
        self.action == KeyAction::Release
    }
}

/// Movement on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step as (dx, dy), y growing downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Arrow keys map to directions
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}
