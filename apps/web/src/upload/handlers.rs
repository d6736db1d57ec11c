//! Axum route handlers for the upload form.

use askama::Template;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::resume::{ModelType, ResumeUpload};
use crate::pages::{
    UploadPage, UPLOAD_FAILED, UPLOAD_MALFORMED, UPLOAD_MISSING_FILE, UPLOAD_TOO_LARGE,
};
use crate::state::AppState;

/// The raw multipart fields, before validation.
#[derive(Debug, Default)]
struct UploadFields {
    model_type: Option<String>,
    file: Option<UploadedFile>,
}

#[derive(Debug)]
struct UploadedFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// GET /upload
pub async fn handle_upload_form() -> Result<Html<String>, AppError> {
    Ok(Html(UploadPage::new(ModelType::default(), None).render()?))
}

/// POST /upload
///
/// Validates locally (a file must be chosen), forwards the PDF to the backend
/// and redirects to the thank-you page. On failure the form is shown again with
/// an alert and the chosen model still selected.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let fields = match read_fields(&mut multipart).await {
        Ok(fields) => fields,
        Err(e) => {
            warn!("Unreadable upload body: {e}");
            let (status, alert) = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                (StatusCode::PAYLOAD_TOO_LARGE, UPLOAD_TOO_LARGE)
            } else {
                (StatusCode::BAD_REQUEST, UPLOAD_MALFORMED)
            };
            return render_form(status, ModelType::default(), alert);
        }
    };

    let model_type = match fields.model_type.as_deref() {
        None => ModelType::default(),
        Some(raw) => match raw.parse::<ModelType>() {
            Ok(model_type) => model_type,
            Err(e) => {
                return render_form(StatusCode::BAD_REQUEST, ModelType::default(), &e.to_string())
            }
        },
    };

    let Some(file) = fields.file else {
        return render_form(StatusCode::BAD_REQUEST, model_type, UPLOAD_MISSING_FILE);
    };

    let upload = ResumeUpload {
        model_type,
        file_name: file.file_name,
        content_type: file.content_type,
        bytes: file.bytes,
    };

    info!(
        "Forwarding resume {} ({} bytes) with model {}",
        upload.file_name,
        upload.bytes.len(),
        model_type
    );

    match state.api.upload_resume(upload).await {
        Ok(()) => Ok(Redirect::to("/thank-you").into_response()),
        Err(e) => {
            error!("Resume upload failed: {e}");
            render_form(StatusCode::BAD_GATEWAY, model_type, UPLOAD_FAILED)
        }
    }
}

fn render_form(status: StatusCode, selected: ModelType, alert: &str) -> Result<Response, AppError> {
    let body = UploadPage::new(selected, Some(alert)).render()?;
    Ok((status, Html(body)).into_response())
}

async fn read_fields(multipart: &mut Multipart) -> Result<UploadFields, MultipartError> {
    let mut fields = UploadFields::default();

    // Parts we don't read are skipped by the next `next_field` call.
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "model_type" => {
                fields.model_type = Some(field.text().await?);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if !file_name.is_empty() {
                    fields.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(fields)
}
