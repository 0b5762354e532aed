//! Shooter state machine: steer, fire, spawn, collide, restart

use crate::config::MarsConfig;
use crate::entities::{Alien, Bullet, Player};
use arcade_core::{Color, Frame, Game, GameEvent, GameRng, GameStatus, Key, KeyEvent, TextSize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Left/right keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

/// Shoot the aliens before they reach the ground
#[derive(Debug, Clone)]
pub struct MarsGame {
    config: MarsConfig,
    rng: GameRng,
    player: Player,
    bullets: Vec<Bullet>,
    aliens: Vec<Alien>,
    steering: Steering,
    spawn_counter: u32,
    status: GameStatus,
    score: u32,
}

impl MarsGame {
    pub fn new(config: MarsConfig, rng: GameRng) -> Self {
        let player = Self::spawn_player(&config);
        Self {
            config,
            rng,
            player,
            bullets: Vec::new(),
            aliens: Vec::new(),
            steering: Steering::default(),
            spawn_counter: 0,
            status: GameStatus::Running,
            score: 0,
        }
    }

    fn spawn_player(config: &MarsConfig) -> Player {
        let (x, y) = config.player_start();
        Player::new(x, y, config.player_size, config.player_speed)
    }

    pub fn config(&self) -> &MarsConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn steering(&self) -> Steering {
        self.steering
    }

    fn fire(&mut self) {
        let (x, y) = self.player.muzzle(self.config.bullet_width);
        self.bullets.push(Bullet::new(
            x,
            y,
            self.config.bullet_width,
            self.config.bullet_height,
            self.config.bullet_speed,
        ));
    }

    fn spawn_alien(&mut self) {
        let size = self.config.alien_size;
        let x = self.rng.below(self.config.panel_width - size);
        self.aliens.push(Alien::new(x, -size, size, self.config.alien_speed));
    }

    /// Remove every bullet/alien pair that touches, returning the number of pairs
    fn resolve_hits(&mut self) -> u32 {
        let mut spent_bullets = BTreeSet::new();
        let mut dead_aliens = BTreeSet::new();
        let mut pairs = 0;

        for (bi, bullet) in self.bullets.iter().enumerate() {
            for (ai, alien) in self.aliens.iter().enumerate() {
                if bullet.bounds().intersects(&alien.bounds()) {
                    spent_bullets.insert(bi);
                    dead_aliens.insert(ai);
                    pairs += 1;
                }
            }
        }

        let mut index = 0;
        self.bullets.retain(|_| {
            index += 1;
            !spent_bullets.contains(&(index - 1))
        });
        let mut index = 0;
        self.aliens.retain(|_| {
            index += 1;
            !dead_aliens.contains(&(index - 1))
        });
        pairs
    }
}

impl Game for MarsGame {
    fn title(&self) -> &str {
        "Mars Attacks Arcade Game"
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
        if event.is_release() {
            match event.key {
                Key::Left => self.steering.left = false,
                Key::Right => self.steering.right = false,
                _ => {}
            }
            return Vec::new();
        }

        match self.status {
            GameStatus::Running => match event.key {
                Key::Left => self.steering.left = true,
                Key::Right => self.steering.right = true,
                Key::Space => {
                    self.fire();
                    return vec![GameEvent::Fired];
                }
                _ => {}
            },
            GameStatus::GameOver if event.key.is_letter('r') => {
                self.restart();
                return vec![GameEvent::Restarted];
            }
            GameStatus::GameOver => {}
        }
        Vec::new()
    }

    fn update(&mut self) -> Vec<GameEvent> {
        if self.status.is_over() {
            return Vec::new();
        }
        let mut events = Vec::new();
        let mut over = false;

        let width = self.config.panel_width;
        let speed = self.player.speed();
        if self.steering.left {
            self.player.move_by(-speed, width);
        }
        if self.steering.right {
            self.player.move_by(speed, width);
        }

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| !b.is_off_screen());

        let height = self.config.panel_height;
        for alien in &mut self.aliens {
            alien.update();
            over |= alien.has_landed(height);
        }

        self.spawn_counter += 1;
        if self.spawn_counter >= self.config.spawn_delay {
            self.spawn_alien();
            self.spawn_counter = 0;
            events.push(GameEvent::Spawned("alien"));
        }

        let pairs = self.resolve_hits();
        if pairs > 0 {
            let points = pairs * self.config.points_per_hit;
            self.score += points;
            events.push(GameEvent::Scored {
                points,
                total: self.score,
            });
        }

        let ship = self.player.bounds();
        over |= self.aliens.iter().any(|a| a.bounds().intersects(&ship));

        if over {
            self.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        }
        events
    }

    fn view(&self, frame: &mut Frame) {
        let (_, height) = self.size();
        frame.clear(Color::BLACK);

        if self.status.is_over() {
            frame.centered_text("Game Over", height / 2, TextSize::Large, Color::RED);
            frame.centered_text(
                "Press R to Restart",
                height / 2 + 40,
                TextSize::Small,
                Color::RED,
            );
            frame.centered_text(
                format!("Final Score: {}", self.score),
                height / 2 + 80,
                TextSize::Small,
                Color::WHITE,
            );
            return;
        }

        frame.fill_rect(self.player.bounds(), Color::BLUE);
        for bullet in &self.bullets {
            frame.fill_rect(bullet.bounds(), Color::YELLOW);
        }
        for alien in &self.aliens {
            frame.fill_oval(alien.bounds(), Color::RED);
        }
        frame.text(
            format!("Score: {}", self.score),
            10,
            20,
            TextSize::Small,
            Color::WHITE,
        );
    }

    fn restart(&mut self) {
        self.player = Self::spawn_player(&self.config);
        self.bullets.clear();
        self.aliens.clear();
        self.steering = Steering::default();
        self.spawn_counter = 0;
        self.status = GameStatus::Running;
        self.score = 0;
    }
}
