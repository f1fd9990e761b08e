//! Systems that run clipboard requests against the live scene.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::scene::SceneHost;

use super::error::ClipboardError;
use super::host::{clear_clipboard, copy_selection, paste_selection};
use super::messages::{
    ClearClipboardRequest, ClipboardNotification, ClipboardOutcome, CopyTransformRequest,
    PasteTransformRequest,
};
use super::selection::EntrySelection;
use super::store::ClipboardStore;

fn log_result(result: &Result<ClipboardOutcome, ClipboardError>) {
    match result {
        Ok(ClipboardOutcome::Copied { index, object_id }) => {
            info!("Copied transform of '{}' into clipboard entry {}", object_id, index);
        }
        Ok(ClipboardOutcome::Pasted { targets }) => {
            info!("Pasted transform onto {} object(s)", targets);
        }
        Ok(ClipboardOutcome::Cleared) => info!("Clipboard cleared"),
        Err(e) => warn!("Clipboard operation failed: {}", e),
    }
}

pub fn handle_copy_requests(
    mut requests: MessageReader<CopyTransformRequest>,
    mut store: ResMut<ClipboardStore>,
    host: SceneHost,
    mut notifications: MessageWriter<ClipboardNotification>,
) {
    for _ in requests.read() {
        let result = copy_selection(&mut store, &host);
        log_result(&result);
        notifications.write(result.into());
    }
}

pub fn handle_paste_requests(
    mut requests: MessageReader<PasteTransformRequest>,
    store: Res<ClipboardStore>,
    mut entry_selection: ResMut<EntrySelection>,
    mut host: SceneHost,
    mut notifications: MessageWriter<ClipboardNotification>,
) {
    for request in requests.read() {
        debug!("Paste requested for clipboard entries {:?}", request.entries);
        let result = paste_selection(&store, &mut host, &request.entries);

        // A stale entry means the list is out of date with the store
        if let Err(e) = &result
            && e.is_stale_view()
        {
            entry_selection.clear();
        }

        log_result(&result);
        notifications.write(result.into());
    }
}

pub fn handle_clear_requests(
    mut requests: MessageReader<ClearClipboardRequest>,
    mut store: ResMut<ClipboardStore>,
    mut entry_selection: ResMut<EntrySelection>,
    mut notifications: MessageWriter<ClipboardNotification>,
) {
    for _ in requests.read() {
        let outcome = clear_clipboard(&mut store);
        entry_selection.clear();

        let result = Ok(outcome);
        log_result(&result);
        notifications.write(result.into());
    }
}

/// Ctrl+C copy, Ctrl+V paste, Ctrl+Shift+Backspace clear
pub fn handle_clipboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    entry_selection: Res<EntrySelection>,
    mut copy_events: MessageWriter<CopyTransformRequest>,
    mut paste_events: MessageWriter<PasteTransformRequest>,
    mut clear_events: MessageWriter<ClearClipboardRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Don't steal shortcuts while the user is typing
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if keyboard.just_pressed(KeyCode::KeyC) {
        copy_events.write(CopyTransformRequest);
    } else if keyboard.just_pressed(KeyCode::KeyV) {
        paste_events.write(PasteTransformRequest {
            entries: entry_selection.indices().to_vec(),
        });
    } else if shift && keyboard.just_pressed(KeyCode::Backspace) {
        clear_events.write(ClearClipboardRequest);
    }
}
