//! Headless tests running the clipboard systems against scene objects.

#![cfg(test)]

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use crate::clipboard::{
    handle_clear_requests, handle_copy_requests, handle_paste_requests, ClearClipboardRequest,
    ClipboardError, ClipboardNotification, ClipboardOutcome, ClipboardStore, CopyTransformRequest,
    EntrySelection, PasteTransformRequest, TransformHost,
};
use crate::scene::host::transform_matrix;
use crate::scene::{SceneHost, SceneObject, SceneSelection};

/// Notifications seen during the last update
#[derive(Resource, Default)]
struct NotificationLog(Vec<ClipboardNotification>);

fn collect_notifications(
    mut notifications: MessageReader<ClipboardNotification>,
    mut log: ResMut<NotificationLog>,
) {
    log.0.extend(notifications.read().cloned());
}

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<SceneSelection>()
        .init_resource::<ClipboardStore>()
        .init_resource::<EntrySelection>()
        .init_resource::<NotificationLog>()
        .add_message::<CopyTransformRequest>()
        .add_message::<PasteTransformRequest>()
        .add_message::<ClearClipboardRequest>()
        .add_message::<ClipboardNotification>()
        .add_systems(
            Update,
            (
                handle_copy_requests,
                handle_paste_requests,
                handle_clear_requests,
                collect_notifications,
            )
                .chain(),
        );
    app
}

fn spawn_object(app: &mut App, name: &str, transform: Transform) -> Entity {
    app.world_mut()
        .spawn((Name::new(name.to_string()), SceneObject, transform))
        .id()
}

fn select(app: &mut App, entities: &[Entity]) {
    let mut selection = app.world_mut().resource_mut::<SceneSelection>();
    selection.clear();
    for entity in entities {
        selection.toggle(*entity);
    }
}

fn send<M: Message>(app: &mut App, message: M) {
    app.world_mut().write_message(message);
    app.update();
}

fn last_result(app: &App) -> Result<ClipboardOutcome, ClipboardError> {
    app.world()
        .resource::<NotificationLog>()
        .0
        .last()
        .map(|n| n.result.clone())
        .unwrap()
}

fn translation_of(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

#[test]
fn test_copy_records_first_selected_object() {
    let mut app = test_app();
    let lamp = spawn_object(&mut app, "Lamp", Transform::from_xyz(10.0, 20.0, 0.0));
    let crate_ = spawn_object(&mut app, "Crate", Transform::from_xyz(-5.0, 0.0, 0.0));
    select(&mut app, &[lamp, crate_]);

    send(&mut app, CopyTransformRequest);

    assert_eq!(
        last_result(&app),
        Ok(ClipboardOutcome::Copied {
            index: 0,
            object_id: "Lamp".to_string()
        })
    );
    let store = app.world().resource::<ClipboardStore>();
    assert_eq!(store.len(), 1);
    let record = store.get(0).unwrap();
    assert_eq!(record.object_name(), "Lamp");
    assert_eq!(
        record.transform(),
        &transform_matrix(&Transform::from_xyz(10.0, 20.0, 0.0))
    );
}

#[test]
fn test_copy_with_nothing_selected() {
    let mut app = test_app();
    spawn_object(&mut app, "Lamp", Transform::IDENTITY);

    send(&mut app, CopyTransformRequest);

    assert_eq!(last_result(&app), Err(ClipboardError::EmptySelection));
    assert!(app.world().resource::<ClipboardStore>().is_empty());
}

#[test]
fn test_paste_single_entry_onto_every_target() {
    let mut app = test_app();
    let source = spawn_object(&mut app, "Source", Transform::from_xyz(7.0, -3.0, 2.0));
    let a = spawn_object(&mut app, "A", Transform::IDENTITY);
    let b = spawn_object(&mut app, "B", Transform::IDENTITY);

    select(&mut app, &[source]);
    send(&mut app, CopyTransformRequest);

    select(&mut app, &[a, b]);
    send(&mut app, PasteTransformRequest { entries: vec![0] });

    assert_eq!(last_result(&app), Ok(ClipboardOutcome::Pasted { targets: 2 }));
    assert_eq!(translation_of(&app, a), Vec3::new(7.0, -3.0, 2.0));
    assert_eq!(translation_of(&app, b), Vec3::new(7.0, -3.0, 2.0));
}

#[test]
fn test_paste_multiple_entries_averages_translation() {
    let mut app = test_app();
    let first = spawn_object(&mut app, "First", Transform::from_xyz(2.0, 0.0, 0.0));
    let second = spawn_object(&mut app, "Second", Transform::from_xyz(4.0, 10.0, 0.0));
    let target = spawn_object(&mut app, "Target", Transform::from_xyz(100.0, 100.0, 0.0));

    select(&mut app, &[first]);
    send(&mut app, CopyTransformRequest);
    select(&mut app, &[second]);
    send(&mut app, CopyTransformRequest);

    select(&mut app, &[target]);
    send(&mut app, PasteTransformRequest { entries: vec![0, 1] });

    assert_eq!(translation_of(&app, target), Vec3::new(3.0, 5.0, 0.0));
    let scale = app.world().get::<Transform>(target).unwrap().scale;
    assert!(scale.abs_diff_eq(Vec3::ONE, 1e-6));
}

#[test]
fn test_paste_stale_entry_drops_entry_selection() {
    let mut app = test_app();
    let a = spawn_object(&mut app, "A", Transform::IDENTITY);
    select(&mut app, &[a]);
    app.world_mut().resource_mut::<EntrySelection>().select_only(4);

    send(&mut app, PasteTransformRequest { entries: vec![4] });

    assert_eq!(
        last_result(&app),
        Err(ClipboardError::InvalidIndex { index: 4, len: 0 })
    );
    assert!(app.world().resource::<EntrySelection>().is_empty());
}

#[test]
fn test_clear_empties_store_and_entry_selection() {
    let mut app = test_app();
    let a = spawn_object(&mut app, "A", Transform::IDENTITY);
    select(&mut app, &[a]);
    send(&mut app, CopyTransformRequest);
    app.world_mut().resource_mut::<EntrySelection>().select_only(0);

    send(&mut app, ClearClipboardRequest);

    assert_eq!(last_result(&app), Ok(ClipboardOutcome::Cleared));
    assert!(app.world().resource::<ClipboardStore>().is_empty());
    assert!(app.world().resource::<EntrySelection>().is_empty());
}

#[test]
fn test_host_selection_order_and_despawned_objects() {
    let mut app = test_app();
    let a = spawn_object(&mut app, "A", Transform::IDENTITY);
    let b = spawn_object(&mut app, "B", Transform::IDENTITY);
    let c = spawn_object(&mut app, "C", Transform::IDENTITY);
    select(&mut app, &[c, a, b]);
    app.world_mut().despawn(a);

    let names = app
        .world_mut()
        .run_system_once(|host: SceneHost| host.current_selection())
        .unwrap();

    assert_eq!(names, vec!["C".to_string(), "B".to_string()]);
}

#[test]
fn test_scene_selection_toggle() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();
    let mut selection = SceneSelection::default();

    selection.select_only(a);
    selection.toggle(b);
    assert_eq!(selection.entities(), &[a, b]);

    selection.toggle(a);
    assert_eq!(selection.entities(), &[b]);
    assert!(!selection.contains(a));
}
