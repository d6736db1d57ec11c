//! In-memory `ResumeApi` used by the router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, ResumeApi};
use crate::models::resume::{ResumeRecord, ResumeUpload, SearchRequest};

#[derive(Debug, Clone)]
pub enum RecordedCall {
    Upload(ResumeUpload),
    Search(SearchRequest),
    Fetch(i64),
}

/// Records every call and answers with canned responses.
/// `None` for a response means the call fails with a 500.
pub struct FakeResumeApi {
    pub calls: Mutex<Vec<RecordedCall>>,
    pub upload_ok: bool,
    pub search_body: Option<Value>,
    pub fetch_body: Option<Value>,
}

impl Default for FakeResumeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            upload_ok: true,
            search_body: None,
            fetch_body: None,
        }
    }
}

impl FakeResumeApi {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "An unexpected error occurred".to_string(),
    }
}

#[async_trait]
impl ResumeApi for FakeResumeApi {
    async fn upload_resume(&self, upload: ResumeUpload) -> Result<(), ApiError> {
        self.record(RecordedCall::Upload(upload));
        if self.upload_ok {
            Ok(())
        } else {
            Err(server_error())
        }
    }

    async fn search_resume(&self, request: &SearchRequest) -> Result<ResumeRecord, ApiError> {
        self.record(RecordedCall::Search(request.clone()));
        match &self.search_body {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(server_error()),
        }
    }

    async fn fetch_resume(&self, id: i64) -> Result<ResumeRecord, ApiError> {
        self.record(RecordedCall::Fetch(id));
        match &self.fetch_body {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(ApiError::Status {
                status: 404,
                message: "Travel resume not found".to_string(),
            }),
        }
    }
}
