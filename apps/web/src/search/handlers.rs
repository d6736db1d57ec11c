//! Axum route handlers for search, the search result view and resume detail.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::SearchRequest;
use crate::pages::{ResultPage, SearchPage, SEARCH_FAILED};
use crate::render::ResumeView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub user_prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub id: Option<String>,
}

/// GET /search
pub async fn handle_search_form() -> Result<Html<String>, AppError> {
    let page = SearchPage {
        user_prompt: String::new(),
        alert: None,
    };
    Ok(Html(page.render()?))
}

/// POST /search
///
/// Sends the prompt to the backend, stores whatever record comes back and
/// redirects to `/search-result?id=...`. If the call fails the search page is
/// shown again with the prompt kept and an alert.
pub async fn handle_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let request = SearchRequest {
        user_prompt: form.user_prompt,
    };

    match state.api.search_resume(&request).await {
        Ok(record) => {
            let id = state.results.insert(record);
            debug!("Stored search result {id}");
            Ok(Redirect::to(&format!("/search-result?id={id}")).into_response())
        }
        Err(e) => {
            error!("Resume search failed: {e}");
            let page = SearchPage {
                user_prompt: request.user_prompt,
                alert: Some(SEARCH_FAILED.to_string()),
            };
            Ok((StatusCode::BAD_GATEWAY, Html(page.render()?)).into_response())
        }
    }
}

/// GET /search-result?id=<uuid>
///
/// Pure display. A missing, malformed, unknown or expired id renders the
/// "No resume data found." view.
pub async fn handle_search_result(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> Result<Html<String>, AppError> {
    let record = query
        .id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .and_then(|id| state.results.get(&id));

    let page = ResultPage::new(record.as_ref().map(ResumeView::from_record));
    Ok(Html(page.render()?))
}

/// GET /resumes/:id
///
/// Fetches one resume from the backend by its id and renders it like a search result.
pub async fn handle_resume_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let record = state.api.fetch_resume(id).await?;
    let page = ResultPage::new(Some(ResumeView::from_record(&record)));
    Ok(Html(page.render()?))
}
