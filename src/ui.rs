use bevy::color::ColorToPacked;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, FontId, RichText};
use bevy_egui::{EguiContexts, EguiPlugin};

use crate::settings::GameSettings;
use crate::sim::{FrameSet, GameState};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin).add_systems(
            Update,
            (score_overlay, diagnostics_panel).in_set(FrameSet::Render),
        );
    }
}

fn egui_color(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

fn score_overlay(mut contexts: EguiContexts, settings: Res<GameSettings>, state: Res<GameState>) {
    egui::Area::new("score".into())
        .fixed_pos(egui::pos2(settings.score_pos.x, settings.score_pos.y))
        .show(contexts.ctx_mut(), |ui| {
            let text = RichText::new(score_text(state.score))
                .font(FontId::proportional(settings.score_font_size))
                .color(egui_color(settings.score_color));
            ui.label(text);
        });
}

fn diagnostics_panel(
    mut contexts: EguiContexts,
    settings: Res<GameSettings>,
    state: Res<GameState>,
    diagnostics: Res<DiagnosticsStore>,
    time: Res<Time>,
) {
    if !settings.show_diagnostics {
        return;
    }

    egui::Window::new("Diagnostics").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                ui.label(format!("FPS: {:.1}", value));
            }
        }
        ui.label(format!("Frame dt: {:.2} ms", time.delta_seconds() * 1000.0));
        ui.label(format!("Pipe speed: {:.1}", state.pipe.speed));
    });
}
