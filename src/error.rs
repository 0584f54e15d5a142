// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between pressing submit and holding a parsed result.
///
/// The widget never shows these to the user; they are logged and folded into one
/// generic message.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("could not build multipart form: {0}")]
    Form(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response body is JSON but not an object")]
    NotAnObject,
}

/// Failures while loading a file the user picked.
#[derive(Error, Debug)]
pub enum SelectError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a regular file")]
    NotAFile(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL {0:?}: must be an absolute http(s) URL")]
    InvalidUrl(String),

    #[error("invalid timeout {0:?}: expected a positive number of whole seconds")]
    InvalidTimeout(String),
}
