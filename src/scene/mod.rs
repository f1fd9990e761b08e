//! Demo scene standing in for the host application.
//!
//! Objects are sprites carrying a [`SceneObject`] marker and a [`Name`]; the
//! name is the object identifier the clipboard records. [`SceneSelection`]
//! keeps the selected objects in the order they were picked, and
//! [`SceneHost`] exposes all of it to the clipboard as a `TransformHost`.

mod host;
mod selection;
mod tests;

pub use host::SceneHost;
pub use selection::SceneSelection;

use bevy::math::{Isometry2d, Rot2};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{OBJECT_SIZE, SELECTION_PADDING};
use crate::theme::{object_palette, PRIMARY_SELECTION_COLOR, SELECTION_COLOR};

/// Marker for objects whose transforms can be copied and pasted
#[derive(Component, Debug, Default)]
pub struct SceneObject;

#[derive(Component)]
pub struct SceneCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, SceneCamera));
}

/// Spawn a handful of named objects with distinct transforms
fn spawn_demo_objects(mut commands: Commands) {
    let layouts = [
        ("Crate", Vec3::new(-300.0, 120.0, 0.0), 0.0_f32, Vec2::ONE),
        ("Lamp", Vec3::new(-100.0, -80.0, 1.0), 30.0, Vec2::new(0.5, 1.5)),
        ("Barrel", Vec3::new(120.0, 140.0, 2.0), -15.0, Vec2::splat(1.2)),
        ("Pillar", Vec3::new(280.0, -120.0, 3.0), 45.0, Vec2::new(0.6, 2.0)),
        ("Statue", Vec3::new(0.0, 20.0, 4.0), 90.0, Vec2::splat(0.8)),
    ];

    for ((name, translation, degrees, scale), color) in layouts.into_iter().zip(object_palette()) {
        commands.spawn((
            Name::new(name),
            SceneObject,
            Sprite::from_color(color, Vec2::splat(OBJECT_SIZE)),
            Transform {
                translation,
                rotation: Quat::from_rotation_z(degrees.to_radians()),
                scale: scale.extend(1.0),
            },
        ));
    }
}

/// Outline selected objects; the first one (the copy source) gets its own color
fn draw_selection_outlines(
    mut gizmos: Gizmos,
    selection: Res<SceneSelection>,
    objects: Query<&Transform, With<SceneObject>>,
) {
    for (i, entity) in selection.entities().iter().enumerate() {
        let Ok(transform) = objects.get(*entity) else {
            continue;
        };

        let (angle, _, _) = transform.rotation.to_euler(EulerRot::ZYX);
        let size = transform.scale.truncate().abs() * OBJECT_SIZE + Vec2::splat(SELECTION_PADDING * 2.0);
        let color = if i == 0 {
            PRIMARY_SELECTION_COLOR
        } else {
            SELECTION_COLOR
        };

        gizmos.rect_2d(
            Isometry2d::new(transform.translation.truncate(), Rot2::radians(angle)),
            size,
            color,
        );
    }
}

/// Escape deselects everything
fn handle_deselect_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut selection: ResMut<SceneSelection>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        selection.clear();
    }
}

/// Drop despawned entities from the selection
fn prune_selection(
    mut selection: ResMut<SceneSelection>,
    objects: Query<(), With<SceneObject>>,
) {
    if selection
        .entities()
        .iter()
        .any(|entity| !objects.contains(*entity))
    {
        selection.retain(|entity| objects.contains(entity));
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSelection>()
            .add_systems(Startup, (spawn_camera, spawn_demo_objects))
            .add_systems(
                Update,
                (handle_deselect_shortcut, prune_selection, draw_selection_outlines).chain(),
            );
    }
}
