//! Plain data records for the bird and the pipe.
//!
//! All positions are play-area coordinates: origin at the top-left corner,
//! x to the right, y downwards.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, positive = falling.
    pub speed: f32,
    pub gravity: f32,
    pub color: Color,
}

impl Bird {
    /// Square bird, one `size` away from the left edge, vertically centered.
    pub fn new(size: f32, gravity: f32, color: Color, area: PlayArea) -> Self {
        Self {
            x: size,
            y: area.height / 2.0 - size / 2.0,
            width: size,
            height: size,
            speed: 0.0,
            gravity,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A vertical barrier with a single gap between `gap_y` and `y_bottom`.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub x: f32,
    pub gap_y: f32,
    /// Always `gap_y + gap_size`.
    pub y_bottom: f32,
    pub width: f32,
    pub gap_size: f32,
    pub speed: f32,
    pub color: Color,
}

impl Pipe {
    /// Pipe at the right edge of the play area with its gap centered.
    pub fn new(width: f32, gap_size: f32, speed: f32, color: Color, area: PlayArea) -> Self {
        let gap_y = area.height / 2.0 - gap_size / 2.0;
        Self {
            x: area.width,
            gap_y,
            y_bottom: gap_y + gap_size,
            width,
            gap_size,
            speed,
            color,
        }
    }

    /// Solid body above the gap.
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.x + self.width, self.gap_y)
    }

    /// Solid body below the gap, down to the floor.
    pub fn bottom_rect(&self, area: PlayArea) -> Rect {
        Rect::new(self.x, self.y_bottom, self.x + self.width, area.height)
    }
}
