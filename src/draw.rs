//! Sprites for the bird and the two pipe bodies.
//!
//! The simulation works in play-area coordinates (top-left origin, y down);
//! the 2D camera is centered on the origin with y up.

use bevy::prelude::*;

use crate::entities::PlayArea;
use crate::settings::GameSettings;
use crate::sim::{FrameSet, GameState};

#[derive(Component)]
pub struct BirdSprite;

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PipeSprite {
    Top,
    Bottom,
}

pub struct DrawPlugin;
impl Plugin for DrawPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sprites).add_systems(
            Update,
            (draw_bird, draw_pipe).in_set(FrameSet::Render),
        );
    }
}

/// World-space center and size of a play-area rectangle.
pub fn to_world(area: PlayArea, rect: Rect) -> (Vec2, Vec2) {
    let center = rect.center();
    (
        Vec2::new(
            center.x - area.width / 2.0,
            area.height / 2.0 - center.y,
        ),
        rect.size(),
    )
}

fn place(area: PlayArea, rect: Rect, transform: &mut Transform, sprite: &mut Sprite) {
    let (center, size) = to_world(area, rect);
    transform.translation.x = center.x;
    transform.translation.y = center.y;
    sprite.custom_size = Some(size);
}

fn spawn_sprites(mut commands: Commands, settings: Res<GameSettings>) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: settings.bird_color,
                custom_size: Some(Vec2::splat(settings.bird_size)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..default()
        },
        BirdSprite,
    ));

    for half in [PipeSprite::Top, PipeSprite::Bottom] {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: settings.pipe_color,
                    custom_size: Some(Vec2::ZERO),
                    ..default()
                },
                ..default()
            },
            half,
        ));
    }
}

fn draw_bird(
    state: Res<GameState>,
    mut q: Query<(&mut Transform, &mut Sprite), With<BirdSprite>>,
) {
    for (mut t, mut s) in &mut q {
        s.color = state.bird.color;
        place(state.area, state.bird.rect(), &mut t, &mut s);
    }
}

fn draw_pipe(state: Res<GameState>, mut q: Query<(&PipeSprite, &mut Transform, &mut Sprite)>) {
    let pipe = &state.pipe;
    for (half, mut t, mut s) in &mut q {
        let rect = match half {
            PipeSprite::Top => pipe.top_rect(),
            PipeSprite::Bottom => pipe.bottom_rect(state.area),
        };
        s.color = pipe.color;
        place(state.area, rect, &mut t, &mut s);
    }
}
