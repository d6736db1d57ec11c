use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::api_client::ApiError;
use crate::pages::ErrorPage;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Form-level problems (missing file, unreadable or oversized body, failed
/// upload) are not errors here: the handlers re-render the form with an alert.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Upstream(#[from] ApiError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg.clone()),
            AppError::Upstream(e) if e.is_not_found() => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The requested resume does not exist".to_string(),
            ),
            AppError::Upstream(e) => {
                tracing::error!("Backend error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Bad Gateway",
                    "The resume service could not be reached".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "The page could not be rendered".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let page = ErrorPage {
            status: status.as_u16(),
            title: title.to_string(),
            message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {e}");
                (status, page.message).into_response()
            }
        }
    }
}
