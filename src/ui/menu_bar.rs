use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, SetLanguageRequest};
use crate::i18n::{tr, Language, TextKey};

use super::HelpWindowState;

/// Language and Help menus along the top of the window
pub fn menu_bar_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    mut help_state: ResMut<HelpWindowState>,
    mut language_events: MessageWriter<SetLanguageRequest>,
) -> Result {
    let language = config.data.language;

    egui::TopBottomPanel::top("menu_bar").show(contexts.ctx_mut()?, |ui| {
        ui.horizontal(|ui| {
            ui.menu_button(tr(language, TextKey::Language), |ui| {
                for option in Language::all() {
                    if ui
                        .selectable_label(*option == language, option.native_name())
                        .clicked()
                    {
                        language_events.write(SetLanguageRequest { language: *option });
                        ui.close();
                    }
                }
            });

            ui.menu_button(tr(language, TextKey::Help), |ui| {
                if ui.button(tr(language, TextKey::Help)).clicked() {
                    help_state.is_open = true;
                    ui.close();
                }
            });
        });
    });
    Ok(())
}

/// Keep the window title in the current language
pub fn update_window_title(
    config: Res<AppConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let title = tr(config.data.language, TextKey::Title);
    for mut window in windows.iter_mut() {
        if window.title != title {
            window.title = title.to_string();
        }
    }
}
