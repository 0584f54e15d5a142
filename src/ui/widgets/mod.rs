// src/ui/widgets/mod.rs

pub mod file_panel;   // Selected file details and inline image preview.
pub mod footer;       // Submit control, key hints and backend status.
pub mod header;       // Title and tagline.
pub mod input;        // The document path field.
pub mod notice_popup; // Blocking notice (e.g. nothing selected yet).
pub mod result_view;  // Progress, inline error, or the validation result.
