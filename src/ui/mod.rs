//! egui panels standing in for the host's UI.
//!
//! ## Systems
//!
//! - [`menu_bar::menu_bar_ui`]: Language and Help menus
//! - [`outliner::outliner_ui`]: Scene object list and selection
//! - [`clipboard_panel::clipboard_panel_ui`]: Copy/Paste/Clear and the record list
//! - [`toast::toast_ui`]: Fading message for the latest clipboard result
//! - [`help::help_popup_ui`]: Help window (F1)

mod clipboard_panel;
mod dialogs;
mod fonts;
mod help;
mod menu_bar;
mod outliner;
mod toast;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::AppConfig;

/// Resource tracking help window visibility
#[derive(Resource, Default)]
pub struct HelpWindowState {
    pub is_open: bool,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HelpWindowState>()
            .init_resource::<toast::Toast>()
            .add_systems(
                Update,
                (
                    toast::show_clipboard_notifications,
                    toast::tick_toast,
                    help::handle_help_shortcut,
                    menu_bar::update_window_title.run_if(resource_changed::<AppConfig>),
                ),
            )
            // Fonts before anything draws; top panel before side panels so they fit under it
            .add_systems(
                EguiPrimaryContextPass,
                (
                    fonts::install_cjk_font,
                    menu_bar::menu_bar_ui,
                    outliner::outliner_ui,
                    clipboard_panel::clipboard_panel_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    toast::toast_ui,
                    help::help_popup_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .after(clipboard_panel::clipboard_panel_ui),
            );
    }
}
