use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use draft_store::{parse_page, HistoryPage};
use serde::Deserialize;
use tracing::*;

use crate::drafting::{generate_and_submit, DraftRequest};
use crate::{render, AppState};

#[derive(Deserialize, Debug)]
pub(crate) struct HistoryQuery {
    page: Option<String>,
}

pub(crate) async fn index() -> Html<String> {
    Html(render::index_page(&DraftRequest::default(), None))
}

pub(crate) async fn create_draft(
    State(state): State<AppState>,
    Form(request): Form<DraftRequest>,
) -> Response {
    info!("create_draft receive: {:?}", request);

    let outcome = generate_and_submit(&state, &request).await;
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            error!("create_draft {}", e);
            StatusCode::BAD_GATEWAY
        }
    };
    (status, Html(render::index_page(&request, Some(&outcome)))).into_response()
}

pub(crate) async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Html<String> {
    let page = parse_page(query.page.as_deref());

    //A failed listing still renders, empty, with a notice
    let (records, notice) = match state.history.list().await {
        Ok(records) => (records, None),
        Err(e) => {
            warn!("history listing failed: {}", e);
            (Vec::new(), Some("History is unavailable right now."))
        }
    };

    let page = HistoryPage::paginate(records, page);
    debug!(
        "history page={} shown={} total={}",
        page.page,
        page.records.len(),
        page.total
    );
    Html(render::history_page(&page, notice))
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
