/// Resume API client — the single point of entry for all backend calls.
///
/// Handlers never talk to the backend directly; they go through the
/// `ResumeApi` trait held in `AppState`, implemented here over reqwest.
///
/// No retries: a failed call is reported once and the user resubmits.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::resume::{ResumeRecord, ResumeUpload, SearchRequest};

#[cfg(test)]
pub mod fake;

const UPLOAD_PATH: &str = "/api/v1/resume/";
const SEARCH_PATH: &str = "/api/v1/search-resume/";
const DETAIL_PATH: &str = "/api/v1/resume";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// FastAPI error bodies look like `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct BackendError {
    detail: String,
}

/// The backend operations the portal needs. Carried in `AppState` as
/// `Arc<dyn ResumeApi>` so handlers can be exercised against a fake.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    /// POST /api/v1/resume/ as multipart. Any 2xx is success; the body is ignored.
    async fn upload_resume(&self, upload: ResumeUpload) -> Result<(), ApiError>;

    /// POST /api/v1/search-resume/ with `{"user_prompt": ...}`.
    /// The body is treated as the result whatever the status code.
    async fn search_resume(&self, request: &SearchRequest) -> Result<ResumeRecord, ApiError>;

    /// GET /api/v1/resume/{id}
    async fn fetch_resume(&self, id: i64) -> Result<ResumeRecord, ApiError>;
}

#[derive(Clone)]
pub struct ResumeApiClient {
    client: Client,
    base_url: String,
}

impl ResumeApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ResumeApi for ResumeApiClient {
    async fn upload_resume(&self, upload: ResumeUpload) -> Result<(), ApiError> {
        let size = upload.bytes.len();
        let form = Form::new()
            .text("model_type", upload.model_type.as_str())
            .part(
                "file",
                file_part(upload.bytes, upload.file_name.clone(), upload.content_type.as_deref()),
            );

        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Resume upload returned {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        info!(
            "Uploaded {} ({} bytes) with model {}",
            upload.file_name, size, upload.model_type
        );
        Ok(())
    }

    async fn search_resume(&self, request: &SearchRequest) -> Result<ResumeRecord, ApiError> {
        let response = self
            .client
            .post(self.url(SEARCH_PATH))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Resume search returned {}; rendering its body anyway", status);
        }

        let body = response.text().await?;
        let record: ResumeRecord = serde_json::from_str(&body)?;

        debug!(
            "Resume search for {:?} matched {:?}",
            request.user_prompt, record.name
        );
        Ok(record)
    }

    async fn fetch_resume(&self, id: i64) -> Result<ResumeRecord, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("{DETAIL_PATH}/{id}")))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn file_part(bytes: Bytes, file_name: String, content_type: Option<&str>) -> Part {
    let part = Part::bytes(bytes.to_vec()).file_name(file_name.clone());
    match content_type {
        Some(mime) => part
            .mime_str(mime)
            .unwrap_or_else(|_| Part::bytes(bytes.to_vec()).file_name(file_name)),
        None => part,
    }
}

fn error_message(body: String) -> String {
    serde_json::from_str::<BackendError>(&body)
        .map(|e| e.detail)
        .unwrap_or(body)
}
