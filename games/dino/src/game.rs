//! Runner state machine: run, jump, collide, restart

use crate::config::DinoConfig;
use crate::entities::{Cactus, Dinosaur};
use arcade_core::{
    Color, Frame, Game, GameEvent, GameRng, GameStatus, Key, KeyEvent, Rect, TextSize,
};
use std::time::Duration;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to Restart.";

/// The jump-over-obstacles runner
#[derive(Debug, Clone)]
pub struct DinoGame {
    config: DinoConfig,
    rng: GameRng,
    dino: Dinosaur,
    cacti: Vec<Cactus>,
    status: GameStatus,
    spawn_timer_ms: u64,
    /// Cacti that scrolled past
    score: u32,
}

impl DinoGame {
    pub fn new(config: DinoConfig, rng: GameRng) -> Self {
        let dino = Self::spawn_dino(&config);
        Self {
            config,
            rng,
            dino,
            cacti: Vec::new(),
            status: GameStatus::Running,
            spawn_timer_ms: 0,
            score: 0,
        }
    }

    fn spawn_dino(config: &DinoConfig) -> Dinosaur {
        Dinosaur::new(
            config.dino_x,
            config.dino_size,
            config.ground_y,
            config.gravity,
            config.jump_strength,
        )
    }

    pub fn config(&self) -> &DinoConfig {
        &self.config
    }

    pub fn dino(&self) -> &Dinosaur {
        &self.dino
    }

    pub fn cacti(&self) -> &[Cactus] {
        &self.cacti
    }

    /// Roll the spawn threshold and add a cactus when the timer passes it
    fn maybe_spawn(&mut self) -> Option<GameEvent> {
        self.spawn_timer_ms = self.spawn_timer_ms.saturating_add(self.config.tick_ms);
        let bound = i32::try_from(self.config.spawn_jitter_ms).unwrap_or(i32::MAX);
        let jitter = self.rng.below(bound) as u64;
        if self.spawn_timer_ms < self.config.min_spawn_ms.saturating_add(jitter) {
            return None;
        }

        let width = self.config.cactus_min_width + self.rng.below(self.config.cactus_width_jitter);
        let height =
            self.config.cactus_min_height + self.rng.below(self.config.cactus_height_jitter);
        self.cacti.push(Cactus::new(
            self.config.panel_width,
            self.config.ground_y - height,
            width,
            height,
            self.config.cactus_speed,
        ));
        self.spawn_timer_ms = 0;
        Some(GameEvent::Spawned("cactus"))
    }
}

impl Game for DinoGame {
    fn title(&self) -> &str {
        "Dino Game - Jump Over the Cacti!"
    }

    fn size(&self) -> (i32, i32) {
        (self.config.panel_width, self.config.panel_height)
    }

    fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn on_key(&mut self, event: KeyEvent) -> Vec<GameEvent> {
        if !event.is_press() {
            return Vec::new();
        }
        match self.status {
            GameStatus::Running if event.key == Key::Space => {
                if self.dino.jump() {
                    vec![GameEvent::Jumped]
                } else {
                    Vec::new()
                }
            }
            GameStatus::GameOver if event.key.is_letter('r') => {
                self.restart();
                vec![GameEvent::Restarted]
            }
            _ => Vec::new(),
        }
    }

    fn update(&mut self) -> Vec<GameEvent> {
        if self.status.is_over() {
            return Vec::new();
        }
        let mut events = Vec::new();

        self.dino.update();

        let dino = self.dino.bounds();
        let mut hit = false;
        for cactus in &mut self.cacti {
            cactus.update();
            hit |= cactus.bounds().intersects(&dino);
        }

        let before = self.cacti.len();
        self.cacti.retain(|c| !c.is_off_screen());
        for _ in self.cacti.len()..before {
            self.score += 1;
            events.push(GameEvent::Scored {
                points: 1,
                total: self.score,
            });
        }

        if hit {
            self.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        }

        // spawning still runs on the losing tick
        events.extend(self.maybe_spawn());
        events
    }

    fn view(&self, frame: &mut Frame) {
        let (width, height) = self.size();
        frame.clear(Color::WHITE);

        frame.fill_rect(
            Rect::new(0, self.config.ground_y, width, height - self.config.ground_y),
            Color::GREEN.darker(),
        );
        frame.fill_rect(self.dino.bounds(), Color::BLUE);
        for cactus in &self.cacti {
            frame.fill_rect(cactus.bounds(), Color::DARK_GRAY);
        }

        frame.text(
            format!("Score: {}", self.score),
            10,
            20,
            TextSize::Small,
            Color::BLACK,
        );

        if self.status.is_over() {
            frame.centered_text(GAME_OVER_MESSAGE, height / 2, TextSize::Large, Color::RED);
        }
    }

    fn restart(&mut self) {
        self.dino = Self::spawn_dino(&self.config);
        self.cacti.clear();
        self.status = GameStatus::Running;
        self.spawn_timer_ms = 0;
        self.score = 0;
    }
}
