//! Copy/paste/clear buttons and the clipboard record list.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::clipboard::{
    ClearClipboardRequest, ClipboardStore, CopyTransformRequest, EntrySelection,
    PasteTransformRequest,
};
use crate::config::AppConfig;
use crate::i18n::{tr, TextKey};

const BUTTON_HEIGHT: f32 = 28.0;

pub fn clipboard_panel_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    store: Res<ClipboardStore>,
    mut entry_selection: ResMut<EntrySelection>,
    mut copy_events: MessageWriter<CopyTransformRequest>,
    mut paste_events: MessageWriter<PasteTransformRequest>,
    mut clear_events: MessageWriter<ClearClipboardRequest>,
) -> Result {
    let language = config.data.language;

    egui::SidePanel::right("clipboard_panel")
        .default_width(380.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(tr(language, TextKey::Title)).heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();

            let width = ui.available_width();
            if ui
                .add_sized([width, BUTTON_HEIGHT], egui::Button::new(tr(language, TextKey::Copy)))
                .on_hover_text("Ctrl+C")
                .clicked()
            {
                copy_events.write(CopyTransformRequest);
            }
            if ui
                .add_sized([width, BUTTON_HEIGHT], egui::Button::new(tr(language, TextKey::Paste)))
                .on_hover_text("Ctrl+V")
                .clicked()
            {
                paste_events.write(PasteTransformRequest {
                    entries: entry_selection.indices().to_vec(),
                });
            }
            if ui
                .add_sized([width, BUTTON_HEIGHT], egui::Button::new(tr(language, TextKey::Clear)))
                .on_hover_text("Ctrl+Shift+Backspace")
                .clicked()
            {
                clear_events.write(ClearClipboardRequest);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(egui::RichText::new(tr(language, TextKey::ClipboardEntries)).strong());
            ui.add_space(4.0);

            if store.is_empty() {
                ui.weak(tr(language, TextKey::ClipboardEmpty));
                return;
            }

            let additive = ui.input(|i| i.modifiers.command || i.modifiers.shift);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, line) in store.display_lines().into_iter().enumerate() {
                        let is_selected = entry_selection.contains(index);
                        let text = egui::RichText::new(line).monospace().size(11.0);
                        if ui.selectable_label(is_selected, text).clicked() {
                            if additive {
                                entry_selection.toggle(index);
                            } else {
                                entry_selection.select_only(index);
                            }
                        }
                    }
                });
        });
    Ok(())
}
