//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Number of values in a flat 4x4 transform matrix
pub const MATRIX_LEN: usize = 16;

/// Side length of the demo scene's square objects, in world units
pub const OBJECT_SIZE: f32 = 80.0;

/// Gap between an object and its selection outline
pub const SELECTION_PADDING: f32 = 6.0;

/// How long a clipboard notification stays on screen, in seconds
pub const TOAST_SECONDS: f32 = 2.5;
