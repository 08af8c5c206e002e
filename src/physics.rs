use std::ops::RangeInclusive;

use bevy::log::warn;
use rand::Rng;

use crate::entities::{Bird, Pipe, PlayArea};
use crate::settings::GameSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BirdMotion {
    Continue,
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeMotion {
    Continue,
    /// The pipe left the screen and has been recycled to the right edge.
    Passed,
}

impl Bird {
    /// Integrates gravity and velocity over `dt`.
    ///
    /// The bounds are checked on the candidate position; on `OutOfBounds`
    /// the bird keeps its last valid `y`.
    pub fn advance(&mut self, dt: f32, settings: &GameSettings, area: PlayArea) -> BirdMotion {
        if self.speed < settings.bird_max_speed {
            self.speed += self.gravity * dt;
        }

        let ny = self.y + self.speed * dt;
        if ny + self.height >= area.height || ny <= 0.0 {
            return BirdMotion::OutOfBounds;
        }

        self.y = ny;
        BirdMotion::Continue
    }

    /// Upward kick, floored at `bird_min_speed`.
    pub fn jump(&mut self, settings: &GameSettings) {
        self.speed = (self.speed + settings.jump_force).max(settings.bird_min_speed);
    }
}

impl Pipe {
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        settings: &GameSettings,
        area: PlayArea,
        rng: &mut R,
    ) -> PipeMotion {
        let nx = self.x - self.speed * dt;
        if nx + self.width <= 0.0 {
            self.recycle(settings, area, rng);
            return PipeMotion::Passed;
        }

        self.x = nx;
        PipeMotion::Continue
    }

    /// Moves the pipe back to the right edge with a fresh gap and a faster speed.
    pub fn recycle<R: Rng + ?Sized>(&mut self, settings: &GameSettings, area: PlayArea, rng: &mut R) {
        self.x = area.width;
        self.gap_y = rng.gen_range(gap_range(area, self.gap_size)) as f32;
        self.y_bottom = self.gap_y + self.gap_size;
        self.speed *= settings.pipe_speed_mod;
    }
}

/// Integer gap starts within `[0.1 * H, 0.9 * H - gap_size]`.
///
/// Both ends are rounded inwards. Collapses to the lower end if the gap
/// does not fit.
pub fn gap_range(area: PlayArea, gap_size: f32) -> RangeInclusive<i32> {
    let min = (area.height * 0.1).ceil() as i32;
    let max = (area.height * 0.9 - gap_size).floor() as i32;
    if max < min {
        warn!(
            gap_size,
            height = area.height,
            "pipe gap does not fit between the margins"
        );
        return min..=min;
    }
    min..=max
}
