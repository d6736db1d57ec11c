use askama::Template;
use axum::{http::Uri, response::Html};

use crate::errors::AppError;
use crate::pages::{Landing, ThankYou};

/// GET /
pub async fn handle_landing() -> Result<Html<String>, AppError> {
    Ok(Html(Landing.render()?))
}

/// GET /thank-you
pub async fn handle_thank_you() -> Result<Html<String>, AppError> {
    Ok(Html(ThankYou.render()?))
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
