// src/core/client.rs

use crate::config::Config;
use crate::core::models::{SelectedFile, ValidationResult};
use crate::error::UploadError;
use reqwest::multipart::{Form, Part};
use strum::Display;
use tracing::{debug, info, warn};
use url::Url;

/// Name of the multipart part carrying the document.
pub const FILE_FIELD: &str = "file";
pub const VALIDATE_PATH: &str = "/validate";

/// Liveness of the backend as last observed by [`ValidationClient::probe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

/// Thin wrapper around a `reqwest::Client` bound to one backend.
#[derive(Debug, Clone)]
pub struct ValidationClient {
    http: reqwest::Client,
    validate_url: Url,
    probe_url: Url,
}

impl ValidationClient {
    pub fn new(config: &Config) -> Result<Self, UploadError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            validate_url: config.endpoint(VALIDATE_PATH),
            probe_url: config.endpoint("/"),
        })
    }

    pub fn validate_url(&self) -> &Url {
        &self.validate_url
    }

    /// Posts `file` as multipart form data and parses the JSON answer.
    ///
    /// A non-success status, a transport error and a body that is not a JSON
    /// object are all returned as errors; nothing here retries.
    pub async fn validate(&self, file: &SelectedFile) -> Result<ValidationResult, UploadError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(UploadError::Form)?;
        let form = Form::new().part(FILE_FIELD, part);

        info!(url = %self.validate_url, file = %file.name, bytes = file.len(), "Posting document for validation.");
        let response = self
            .http
            .post(self.validate_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Validation response received.");
        if !status.is_success() {
            return Err(UploadError::Status(status));
        }

        let body = response.text().await?;
        ValidationResult::from_json(&body)
    }

    /// Checks whether the backend answers on its root path.
    pub async fn probe(&self) -> BackendStatus {
        match self.http.get(self.probe_url.clone()).send().await {
            Ok(response) if response.status().is_success() => {
                info!(url = %self.probe_url, "Backend is reachable.");
                BackendStatus::Online
            }
            Ok(response) => {
                warn!(url = %self.probe_url, status = %response.status(), "Backend answered the probe with an error status.");
                BackendStatus::Offline
            }
            Err(e) => {
                warn!(url = %self.probe_url, error = %e, "Backend probe failed.");
                BackendStatus::Offline
            }
        }
    }
}
