use crate::settings::GameSettings;
use crate::sim::{FrameSet, JumpEvent};
use bevy::prelude::*;

#[derive(Resource)]
pub struct Keybinds {
    pub jump: KeyCode,
    pub diagnostics: KeyCode,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            jump: KeyCode::Space,
            diagnostics: KeyCode::F3,
        }
    }
}

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Keybinds>().add_systems(
            Update,
            (jump_on_release, diagnostics_toggle).in_set(FrameSet::Input),
        );
    }
}

// Jumps fire on release only; holding the key does nothing.
fn jump_on_release(
    keys: Res<ButtonInput<KeyCode>>,
    keybinds: Res<Keybinds>,
    mut ev_jump: EventWriter<JumpEvent>,
) {
    if keys.just_released(keybinds.jump) {
        ev_jump.send(JumpEvent);
    }
}

fn diagnostics_toggle(
    mut settings: ResMut<GameSettings>,
    keys: Res<ButtonInput<KeyCode>>,
    keybinds: Res<Keybinds>,
) {
    if keys.just_pressed(keybinds.diagnostics) {
        settings.show_diagnostics = !settings.show_diagnostics;
    }
}
