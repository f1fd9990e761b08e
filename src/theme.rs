//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Scene Colors
// ============================================================================

/// Light blue outline around selected objects
pub const SELECTION_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

/// Orange outline for the object whose transform a copy will take
pub const PRIMARY_SELECTION_COLOR: Color = Color::srgb(1.0, 0.7, 0.2);

/// Fill colors for the demo scene objects
pub fn object_palette() -> [Color; 5] {
    [
        Color::srgb(0.80, 0.35, 0.30),
        Color::srgb(0.35, 0.70, 0.40),
        Color::srgb(0.30, 0.45, 0.85),
        Color::srgb(0.85, 0.75, 0.30),
        Color::srgb(0.65, 0.40, 0.80),
    ]
}

// ============================================================================
// Notification Colors
// ============================================================================

/// Text color for successful clipboard operations
pub const TOAST_SUCCESS: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);

/// Text color for clipboard warnings
pub const TOAST_WARNING: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);
