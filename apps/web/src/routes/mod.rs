pub mod health;
pub mod pages;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::search::handlers as search;
use crate::state::AppState;
use crate::upload::handlers as upload;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.upload_limit_bytes;

    Router::new()
        .route("/", get(pages::handle_landing))
        .route("/health", get(health::health_handler))
        // Upload flow
        .route(
            "/upload",
            get(upload::handle_upload_form).post(upload::handle_upload),
        )
        .route("/thank-you", get(pages::handle_thank_you))
        // Search flow
        .route(
            "/search",
            get(search::handle_search_form).post(search::handle_search),
        )
        .route("/search-result", get(search::handle_search_result))
        .route("/resumes/:id", get(search::handle_resume_detail))
        .fallback(pages::handle_not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
