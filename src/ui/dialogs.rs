use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, ConfigResetNotification};
use crate::i18n::{tr, TextKey};

/// Tells the user their config file was unusable and defaults are in effect
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
    config: Res<AppConfig>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    let language = config.data.language;
    egui::Window::new("Configuration")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(tr(language, TextKey::ConfigReset));
            if let Some(reason) = &notification.reason {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::GRAY, reason);
            }
            ui.add_space(8.0);
            if ui.button(tr(language, TextKey::Ok)).clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}
