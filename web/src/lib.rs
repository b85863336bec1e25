//! The browser-facing side: a draft form at `/` and the history listing at `/history`.
//!
//! Handlers only see the `text_completion` and `draft_store` traits; concrete
//! clients are injected through `AppState`.

pub mod drafting;
mod handlers;
mod render;

use axum::{routing::get, Router};
use draft_store::{DraftArchive, HistorySource};
use std::sync::Arc;
use text_completion::CompletionHandler;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionHandler + Send + Sync>,
    pub history: Arc<dyn HistorySource + Send + Sync>,
    /// `None` when drafts are only displayed, never stored.
    pub archive: Option<Arc<dyn DraftArchive + Send + Sync>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::create_draft))
        .route("/history", get(handlers::history))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
