use bevy::prelude::*;

use crate::entities::PlayArea;

/// Tuning constants for the window, the bird, the pipe and the score overlay.
#[derive(Resource, Clone, Debug)]
pub struct GameSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub target_fps: f64,
    pub background: Color,

    pub bird_size: f32,
    pub gravity: f32,
    pub bird_max_speed: f32,
    pub bird_min_speed: f32,
    pub jump_force: f32,
    pub bird_color: Color,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_base_speed: f32,
    /// Multiplier applied to the pipe speed on every recycle. Must be > 1.
    pub pipe_speed_mod: f32,
    pub pipe_color: Color,

    pub score_color: Color,
    pub score_font_size: f32,
    pub score_pos: Vec2,

    /// Fixed RNG seed; `None` reseeds from entropy on every run.
    pub seed: Option<u64>,
    pub show_diagnostics: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            title: "Flappy Bird".into(),
            width: 800.0,
            height: 800.0,
            target_fps: 60.0,
            background: Color::srgb_u8(0x19, 0x19, 0x19),

            bird_size: 50.0,
            gravity: 3000.0,
            bird_max_speed: 10_000.0,
            bird_min_speed: -1000.0,
            jump_force: -2000.0,
            bird_color: Color::srgb_u8(0xFF, 0xFF, 0x00),

            pipe_width: 50.0,
            pipe_gap: 300.0,
            pipe_base_speed: 500.0,
            pipe_speed_mod: 1.01,
            pipe_color: Color::srgb_u8(0x00, 0xFF, 0x00),

            score_color: Color::WHITE,
            score_font_size: 20.0,
            score_pos: Vec2::new(5.0, 5.0),

            seed: None,
            show_diagnostics: false,
        }
    }
}

impl GameSettings {
    pub fn play_area(&self) -> PlayArea {
        PlayArea {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_area_matches_window() {
        let settings = GameSettings {
            width: 640.0,
            height: 480.0,
            ..default()
        };
        let area = settings.play_area();
        assert_eq!(area.width, 640.0);
        assert_eq!(area.height, 480.0);
    }

    #[test]
    fn defaults_keep_the_gap_inside_the_margins() {
        let settings = GameSettings::default();
        assert!(settings.pipe_speed_mod > 1.0);
        assert!(settings.jump_force < 0.0);
        assert!(settings.bird_min_speed < 0.0);
        assert!(settings.height * 0.1 <= settings.height * 0.9 - settings.pipe_gap);
    }
}
