mod collision;
mod draw;
mod entities;
mod input;
mod physics;
mod settings;
mod sim;
mod ui;

use std::time::Duration;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use draw::DrawPlugin;
use input::InputPlugin;
use settings::GameSettings;
use sim::SimPlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    let settings = GameSettings::default();
    let frame_interval = Duration::from_secs_f64(1.0 / settings.target_fps);

    App::new()
        .insert_resource(ClearColor(settings.background))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(frame_interval),
            unfocused_mode: UpdateMode::reactive(frame_interval),
        })
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.title.clone(),
                resolution: (settings.width, settings.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins((SimPlugin, InputPlugin, DrawPlugin, UiPlugin))
        .add_systems(Startup, setup_camera)
        .run()
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
