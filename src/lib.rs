//! Terminal front end for a remote document validation service.
//!
//! The user picks a file, the widget posts it as multipart form data to the
//! backend's `/validate` endpoint, and the JSON answer is rendered as an
//! outcome dump, a summary and a list of extracted fields.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ui;
