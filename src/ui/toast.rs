//! Short-lived on-screen message for the latest clipboard notification.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::clipboard::{ClipboardError, ClipboardNotification, ClipboardOutcome};
use crate::config::AppConfig;
use crate::constants::TOAST_SECONDS;
use crate::i18n::{tr, TextKey};
use crate::theme::{TOAST_SUCCESS, TOAST_WARNING};

pub struct ToastMessage {
    pub key: TextKey,
    pub is_warning: bool,
    timer: Timer,
}

/// The message currently on screen, if any
#[derive(Resource, Default)]
pub struct Toast {
    pub message: Option<ToastMessage>,
}

impl Toast {
    /// Replace whatever is showing with the text for `result`
    pub fn show(&mut self, result: &Result<ClipboardOutcome, ClipboardError>) {
        let (key, is_warning) = match result {
            Ok(outcome) => (TextKey::for_outcome(outcome), false),
            Err(e) => (TextKey::for_error(e), true),
        };
        self.message = Some(ToastMessage {
            key,
            is_warning,
            timer: Timer::from_seconds(TOAST_SECONDS, TimerMode::Once),
        });
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        if let Some(message) = &mut self.message {
            message.timer.tick(delta);
            if message.timer.is_finished() {
                self.message = None;
            }
        }
    }
}

pub fn show_clipboard_notifications(
    mut notifications: MessageReader<ClipboardNotification>,
    mut toast: ResMut<Toast>,
) {
    for notification in notifications.read() {
        toast.show(&notification.result);
    }
}

pub fn tick_toast(time: Res<Time>, mut toast: ResMut<Toast>) {
    if toast.message.is_some() {
        toast.tick(time.delta());
    }
}

/// Fades out over its lifetime, like an in-viewport message
pub fn toast_ui(mut contexts: EguiContexts, toast: Res<Toast>, config: Res<AppConfig>) -> Result {
    let Some(message) = &toast.message else {
        return Ok(());
    };

    let color = if message.is_warning {
        TOAST_WARNING
    } else {
        TOAST_SUCCESS
    };
    let fade = message.timer.fraction_remaining().clamp(0.2, 1.0);

    egui::Area::new(egui::Id::new("clipboard_toast"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 48.0])
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.colored_label(
                    color.gamma_multiply(fade),
                    egui::RichText::new(tr(config.data.language, message.key)).size(16.0),
                );
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_toast_default_is_hidden() {
        assert!(Toast::default().message.is_none());
    }

    #[test]
    fn test_toast_shows_outcome_and_error() {
        let mut toast = Toast::default();

        toast.show(&Ok(ClipboardOutcome::Cleared));
        let message = toast.message.as_ref().unwrap();
        assert_eq!(message.key, TextKey::Cleared);
        assert!(!message.is_warning);

        toast.show(&Err(ClipboardError::NoRecordsSelected));
        let message = toast.message.as_ref().unwrap();
        assert_eq!(message.key, TextKey::RecordWarning);
        assert!(message.is_warning);
    }

    #[test]
    fn test_toast_expires() {
        let mut toast = Toast::default();
        toast.show(&Ok(ClipboardOutcome::Pasted { targets: 1 }));

        toast.tick(Duration::from_secs_f32(TOAST_SECONDS / 2.0));
        assert!(toast.message.is_some());

        toast.tick(Duration::from_secs_f32(TOAST_SECONDS));
        assert!(toast.message.is_none());
    }
}
