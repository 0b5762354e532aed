//! Tunables for the snake board

use arcade_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snake configuration. Every field is optional in a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub board_width: i32,
    pub board_height: i32,
    /// Side of one grid cell in pixels
    pub unit: i32,
    pub tick_ms: u64,
    /// Length of the snake at the start of a round
    pub initial_parts: usize,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            unit: 25,
            tick_ms: 75,
            initial_parts: 6,
        }
    }
}

impl SnakeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Grid size in cells (columns, rows)
    pub fn grid(&self) -> (i32, i32) {
        (self.board_width / self.unit, self.board_height / self.unit)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.unit <= 0 {
            return invalid("unit must be positive");
        }
        if self.board_width < self.unit || self.board_height < self.unit {
            return invalid("board must hold at least one cell");
        }
        if self.board_width % self.unit != 0 || self.board_height % self.unit != 0 {
            return invalid("board dimensions must be multiples of unit");
        }
        if self.tick_ms == 0 {
            return invalid("tick_ms must be greater than zero");
        }
        if self.initial_parts == 0 {
            return invalid("initial_parts must be at least one");
        }
        let (cols, rows) = self.grid();
        if cols < 2 && rows < 2 {
            return invalid("board needs room for the snake to move");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::config::parse_ron;

    #[test]
    fn test_defaults() {
        let config = SnakeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), (24, 24));
        assert_eq!(config.tick_interval(), Duration::from_millis(75));
    }

    #[test]
    fn test_bundled_file_matches_defaults() {
        let config: SnakeConfig = parse_ron(include_str!("../data/snake.ron")).unwrap();
        assert_eq!(config, SnakeConfig::default());
    }

    #[test]
    fn test_partial_ron() {
        let config: SnakeConfig = parse_ron("(tick_ms: 100)").unwrap();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.unit, 25);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = SnakeConfig::default();
        config.unit = 7;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = SnakeConfig::default();
        config.initial_parts = 0;
        assert!(config.validate().is_err());

        assert!(parse_ron::<SnakeConfig>("(unit: \"big\")").is_err());
    }
}
