//! Tunables for the shooter

use arcade_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shooter configuration. Every field is optional in a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarsConfig {
    pub panel_width: i32,
    pub panel_height: i32,
    pub tick_ms: u64,

    pub player_size: i32,
    /// Gap between the player's bottom edge and the panel bottom
    pub player_margin: i32,
    pub player_speed: i32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_speed: i32,

    pub alien_size: i32,
    pub alien_speed: i32,
    /// Ticks between two alien spawns
    pub spawn_delay: u32,
    pub points_per_hit: u32,
}

impl Default for MarsConfig {
    fn default() -> Self {
        Self {
            panel_width: 800,
            panel_height: 600,
            tick_ms: 20,
            player_size: 40,
            player_margin: 20,
            player_speed: 5,
            bullet_width: 5,
            bullet_height: 10,
            bullet_speed: 7,
            alien_size: 40,
            alien_speed: 2,
            spawn_delay: 50,
            points_per_hit: 10,
        }
    }
}

impl MarsConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Top-left corner of the player at the start of a round
    pub fn player_start(&self) -> (i32, i32) {
        (
            self.panel_width / 2 - self.player_size / 2,
            self.panel_height - self.player_size - self.player_margin,
        )
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.panel_width <= 0 || self.panel_height <= 0 {
            return invalid("panel dimensions must be positive");
        }
        if self.tick_ms == 0 {
            return invalid("tick_ms must be greater than zero");
        }
        if self.player_size <= 0 || self.player_size > self.panel_width {
            return invalid("player must fit the panel width");
        }
        if self.player_margin < 0 || self.player_size + self.player_margin > self.panel_height {
            return invalid("player must fit the panel height");
        }
        if self.bullet_width <= 0 || self.bullet_height <= 0 || self.bullet_speed <= 0 {
            return invalid("bullets need a positive size and speed");
        }
        if self.alien_size <= 0 || self.alien_size >= self.panel_width || self.alien_speed <= 0 {
            return invalid("aliens need a positive speed and a size below the panel width");
        }
        if self.player_speed <= 0 {
            return invalid("player_speed must be positive");
        }
        if self.spawn_delay == 0 {
            return invalid("spawn_delay must be at least one tick");
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
        let config = MarsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_start(), (380, 540));
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_bundled_file_matches_defaults() {
        let config: MarsConfig = parse_ron(include_str!("../data/mars_attacks.ron")).unwrap();
        assert_eq!(config, MarsConfig::default());
    }

    #[test]
    fn test_partial_ron() {
        let config: MarsConfig = parse_ron("(spawn_delay: 20, alien_speed: 4)").unwrap();
        assert_eq!(config.spawn_delay, 20);
        assert_eq!(config.alien_speed, 4);
        assert_eq!(config.bullet_speed, 7);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = MarsConfig::default();
        config.spawn_delay = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = MarsConfig::default();
        config.alien_size = 800;
        assert!(config.validate().is_err());

        let mut config = MarsConfig::default();
        config.player_margin = 580;
        assert!(config.validate().is_err());
    }
}
