use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::i18n::{tr, TextKey};
use crate::scene::{SceneObject, SceneSelection};

/// Scene object list; click selects, Ctrl+click extends the selection in order
pub fn outliner_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    mut selection: ResMut<SceneSelection>,
    objects: Query<(Entity, &Name), With<SceneObject>>,
) -> Result {
    let mut entries: Vec<(Entity, &Name)> = objects.iter().collect();
    entries.sort_by(|a, b| a.1.as_str().cmp(b.1.as_str()));

    egui::SidePanel::left("outliner")
        .default_width(180.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(tr(config.data.language, TextKey::Outliner))
                    .heading()
                    .size(18.0),
            );
            ui.add_space(4.0);
            ui.separator();

            let additive = ui.input(|i| i.modifiers.command || i.modifiers.shift);

            for (entity, name) in entries {
                let position = selection.entities().iter().position(|e| *e == entity);
                let label = match position {
                    Some(i) => format!("{}  ({})", name.as_str(), i + 1),
                    None => name.as_str().to_string(),
                };

                if ui.selectable_label(position.is_some(), label).clicked() {
                    if additive {
                        selection.toggle(entity);
                    } else {
                        selection.select_only(entity);
                    }
                }
            }
        });
    Ok(())
}
