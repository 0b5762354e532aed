//! Draw commands produced by a game's view function
//!
//! A game never paints directly. It appends `DrawCmd`s to a `Frame` in world
//! pixel coordinates and the frontend decides how to present them.

use crate::Rect;
use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel scaled by 0.7
    pub fn darker(self) -> Self {
        let scale = |c: u8| (c as f64 * 0.7) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Horizontal anchoring of a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// `x` is the left edge
    #[default]
    Left,
    /// `x` is the horizontal centre
    Center,
}

/// Relative text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Filled rectangle
    FillRect { rect: Rect, color: Color },

    /// Filled ellipse inscribed in `rect`
    FillOval { rect: Rect, color: Color },

    /// One pixel wide line
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },

    /// Text with its baseline at `y`
    Text {
        text: String,
        x: i32,
        y: i32,
        size: TextSize,
        align: TextAlign,
        color: Color,
    },
}

/// Everything to draw for one render, in world pixels
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    cmds: Vec<DrawCmd>,
}

impl Frame {
    /// Create an empty frame of the given world size
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            cmds: Vec::new(),
        }
    }

    /// Drop all commands and set a new background
    pub fn clear(&mut self, background: Color) {
        self.background = background;
        self.cmds.clear();
    }

    /// Append a raw command
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::FillRect { rect, color });
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::FillOval { rect, color });
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.push(DrawCmd::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    /// Left-aligned text
    pub fn text(&mut self, text: impl Into<String>, x: i32, y: i32, size: TextSize, color: Color) {
        self.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
            size,
            align: TextAlign::Left,
            color,
        });
    }

    /// Text centred horizontally on the frame
    pub fn centered_text(&mut self, text: impl Into<String>, y: i32, size: TextSize, color: Color) {
        self.push(DrawCmd::Text {
            text: text.into(),
            x: self.width / 2,
            y,
            size,
            align: TextAlign::Center,
            color,
        });
    }

    /// All commands in paint order
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Text strings in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darker() {
        assert_eq!(Color::GREEN.darker(), Color::rgb(0, 178, 0));
        assert_eq!(Color::WHITE.darker(), Color::rgb(178, 178, 178));
        assert_eq!(Color::BLACK.darker(), Color::BLACK);
    }

    #[test]
    fn test_frame_records_in_order() {
        let mut frame = Frame::new(800, 600, Color::BLACK);
        assert!(frame.is_empty());

        frame.fill_rect(Rect::new(0, 0, 10, 10), Color::BLUE);
        frame.fill_oval(Rect::new(5, 5, 10, 10), Color::RED);
        frame.centered_text("Game Over", 300, TextSize::Large, Color::RED);

        assert_eq!(frame.len(), 3);
        assert!(matches!(frame.cmds()[0], DrawCmd::FillRect { .. }));
        match &frame.cmds()[2] {
            DrawCmd::Text { x, align, .. } => {
                assert_eq!(*x, 400);
                assert_eq!(*align, TextAlign::Center);
            }
            other => panic!("Expected Text, got {:?}", other),
        }
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["Game Over"]);
    }

    #[test]
    fn test_frame_clear() {
        let mut frame = Frame::new(10, 10, Color::BLACK);
        frame.line(0, 0, 9, 9, Color::WHITE);
        frame.clear(Color::WHITE);
        assert!(frame.is_empty());
        assert_eq!(frame.background, Color::WHITE);
    }
}
