//! The scene as seen by the clipboard.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::clipboard::{TransformHost, TransformMatrix};

use super::selection::SceneSelection;
use super::SceneObject;

/// `TransformHost` over the ECS: objects are looked up by their [`Name`].
#[derive(SystemParam)]
pub struct SceneHost<'w, 's> {
    selection: Res<'w, SceneSelection>,
    objects: Query<'w, 's, (&'static Name, &'static mut Transform), With<SceneObject>>,
}

pub fn transform_matrix(transform: &Transform) -> TransformMatrix {
    Mat4::from_scale_rotation_translation(transform.scale, transform.rotation, transform.translation)
        .into()
}

impl TransformHost for SceneHost<'_, '_> {
    fn current_selection(&self) -> Vec<String> {
        self.selection
            .entities()
            .iter()
            .filter_map(|entity| self.objects.get(*entity).ok())
            .map(|(name, _)| name.as_str().to_owned())
            .collect()
    }

    fn get_transform(&self, object_id: &str) -> Option<TransformMatrix> {
        self.objects
            .iter()
            .find(|(name, _)| name.as_str() == object_id)
            .map(|(_, transform)| transform_matrix(transform))
    }

    fn set_transform(&mut self, object_id: &str, transform: TransformMatrix) {
        let Some((_, mut target)) = self
            .objects
            .iter_mut()
            .find(|(name, _)| name.as_str() == object_id)
        else {
            warn!("Cannot set transform: no scene object named '{}'", object_id);
            return;
        };

        // Non-orthogonal (averaged) matrices are decomposed as best Bevy can
        *target = Transform::from_matrix(transform.into());
    }
}
