//! Ship, bullets and aliens

use arcade_core::Rect;

/// The player's ship. Moves horizontally within the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    rect: Rect,
    speed: i32,
}

impl Player {
    pub fn new(x: i32, y: i32, size: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Shift horizontally, clamped to `[0, panel_width - width]`
    pub fn move_by(&mut self, dx: i32, panel_width: i32) {
        let max_x = panel_width - self.rect.width;
        self.rect.x = (self.rect.x + dx).clamp(0, max_x.max(0));
    }

    /// Where a bullet of the given width leaves the ship
    pub fn muzzle(&self, bullet_width: i32) -> (i32, i32) {
        (
            self.rect.x + self.rect.width / 2 - bullet_width / 2,
            self.rect.y,
        )
    }
}

/// A shot travelling up
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    rect: Rect,
    speed: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn update(&mut self) {
        self.rect.y -= self.speed;
    }

    /// Top edge went past the top of the panel
    pub fn is_off_screen(&self) -> bool {
        self.rect.y < 0
    }
}

/// An invader falling towards the ground
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    rect: Rect,
    speed: i32,
}

impl Alien {
    pub fn new(x: i32, y: i32, size: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn update(&mut self) {
        self.rect.y += self.speed;
    }

    /// Top edge is below the panel
    pub fn has_landed(&self, panel_height: i32) -> bool {
        self.rect.y > panel_height
    }
}
