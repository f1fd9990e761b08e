//! Help window and its keyboard shortcut.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::i18n::{tr, Language, TextKey};

use super::HelpWindowState;

/// Renders the help window with the localized description and shortcuts.
pub fn help_popup_ui(
    mut contexts: EguiContexts,
    mut help_state: ResMut<HelpWindowState>,
    config: Res<AppConfig>,
) -> Result {
    if !help_state.is_open {
        return Ok(());
    }

    let language = config.data.language;
    let ctx = contexts.ctx_mut()?;

    egui::Window::new(tr(language, TextKey::Help))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.label(tr(language, TextKey::HelpText));

            ui.add_space(10.0);
            ui.separator();

            render_shortcuts_section(ui, language);

            ui.add_space(10.0);
            if ui.button(tr(language, TextKey::Ok)).clicked() {
                help_state.is_open = false;
            }
        });
    Ok(())
}

fn render_shortcuts_section(ui: &mut egui::Ui, language: Language) {
    ui.label(egui::RichText::new(tr(language, TextKey::Shortcuts)).strong());
    ui.add_space(4.0);

    egui::Grid::new("help_shortcuts")
        .num_columns(2)
        .spacing([20.0, 4.0])
        .show(ui, |ui| {
            for (keys, action) in [
                ("Ctrl+C", TextKey::Copy),
                ("Ctrl+V", TextKey::Paste),
                ("Ctrl+Shift+Backspace", TextKey::Clear),
                ("F1", TextKey::Help),
            ] {
                ui.monospace(keys);
                ui.label(tr(language, action));
                ui.end_row();
            }
        });
}

/// F1 toggles the help window
pub fn handle_help_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut help_state: ResMut<HelpWindowState>,
    mut contexts: EguiContexts,
) {
    // Don't toggle if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::F1) {
        help_state.is_open = !help_state.is_open;
    }
}
