//! The dinosaur and its obstacles

use arcade_core::Rect;

/// The player character. Only moves vertically.
#[derive(Debug, Clone)]
pub struct Dinosaur {
    rect: Rect,
    ground_y: i32,
    velocity_y: f64,
    gravity: f64,
    jump_strength: f64,
}

impl Dinosaur {
    /// Create a dinosaur standing on the ground
    pub fn new(x: i32, size: i32, ground_y: i32, gravity: f64, jump_strength: f64) -> Self {
        Self {
            rect: Rect::new(x, ground_y - size, size, size),
            ground_y,
            velocity_y: 0.0,
            gravity,
            jump_strength,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn velocity_y(&self) -> f64 {
        self.velocity_y
    }

    fn rest_y(&self) -> i32 {
        self.ground_y - self.rect.height
    }

    pub fn is_on_ground(&self) -> bool {
        self.rect.y >= self.rest_y()
    }

    /// Apply velocity then gravity, landing on the ground
    pub fn update(&mut self) {
        // position stays integral; the fractional part of the step is dropped
        self.rect.y = (self.rect.y as f64 + self.velocity_y) as i32;
        self.velocity_y += self.gravity;

        if self.rect.y >= self.rest_y() {
            self.rect.y = self.rest_y();
            self.velocity_y = 0.0;
        }
    }

    /// Take off if standing on the ground. Returns whether a jump started.
    pub fn jump(&mut self) -> bool {
        if self.is_on_ground() {
            self.velocity_y = self.jump_strength;
            true
        } else {
            false
        }
    }
}

/// An obstacle scrolling towards the dinosaur
#[derive(Debug, Clone, PartialEq)]
pub struct Cactus {
    rect: Rect,
    speed: i32,
}

impl Cactus {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Move left by one step
    pub fn update(&mut self) {
        self.rect.x -= self.speed;
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0
    }
}
