//! Tunables for the runner

use arcade_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runner configuration. Every field is optional in a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DinoConfig {
    pub panel_width: i32,
    pub panel_height: i32,
    /// Top edge of the ground strip
    pub ground_y: i32,
    pub tick_ms: u64,

    pub dino_x: i32,
    pub dino_size: i32,
    /// Added to the vertical velocity every tick
    pub gravity: f64,
    /// Vertical velocity at take-off (negative is up)
    pub jump_strength: f64,

    pub cactus_speed: i32,
    pub cactus_min_width: i32,
    pub cactus_width_jitter: i32,
    pub cactus_min_height: i32,
    pub cactus_height_jitter: i32,

    /// A cactus spawns once the spawn timer reaches
    /// `min_spawn_ms + random(spawn_jitter_ms)`
    pub min_spawn_ms: u64,
    pub spawn_jitter_ms: u64,
}

impl Default for DinoConfig {
    fn default() -> Self {
        Self {
            panel_width: 800,
            panel_height: 400,
            ground_y: 300,
            tick_ms: 20,
            dino_x: 50,
            dino_size: 50,
            gravity: 0.6,
            jump_strength: -12.0,
            cactus_speed: 5,
            cactus_min_width: 20,
            cactus_width_jitter: 10,
            cactus_min_height: 40,
            cactus_height_jitter: 20,
            min_spawn_ms: 1500,
            spawn_jitter_ms: 1000,
        }
    }
}

impl DinoConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
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
        if self.dino_size <= 0
            || self.ground_y < self.dino_size
            || self.ground_y > self.panel_height
        {
            return invalid("ground_y must leave room for the dinosaur inside the panel");
        }
        if self.dino_x < 0 || self.dino_x + self.dino_size > self.panel_width {
            return invalid("dinosaur must start inside the panel");
        }
        if self.gravity <= 0.0 || self.jump_strength >= 0.0 {
            return invalid("gravity must be positive and jump_strength negative");
        }
        if self.cactus_speed <= 0 {
            return invalid("cactus_speed must be positive");
        }
        if self.cactus_min_width <= 0
            || self.cactus_min_height <= 0
            || self.cactus_width_jitter < 0
            || self.cactus_height_jitter < 0
        {
            return invalid("cactus sizes must be positive");
        }
        if self.cactus_min_height + self.cactus_height_jitter > self.ground_y {
            return invalid("cacti must fit above the ground");
        }
        let max_ms = i32::MAX as u64;
        if self.min_spawn_ms > max_ms || self.spawn_jitter_ms > max_ms {
            return invalid("spawn delays must not exceed i32::MAX milliseconds");
        }
        Ok(())
    }
}
