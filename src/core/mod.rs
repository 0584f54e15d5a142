// src/core/mod.rs

/// Data structures shared across the widget: the selected file, the
/// validation payload and its typed key/value entries.
pub mod models;

/// Media type declaration from file extensions.
pub mod media;

/// Scoped image preview handle.
pub mod preview;

/// HTTP client for the validation backend.
pub mod client;

/// Moves submissions and probes onto the runtime and reports back to the UI loop.
pub mod submit;
