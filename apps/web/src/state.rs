use std::sync::Arc;

use crate::api_client::ResumeApi;
use crate::config::Config;
use crate::results::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend client. `ResumeApiClient` in production, a fake in tests.
    pub api: Arc<dyn ResumeApi>,
    pub config: Config,
    /// Search results waiting to be shown on `/search-result`.
    pub results: ResultStore,
}
