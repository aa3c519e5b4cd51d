use crate::{state::AppState, templates::TemplateStore};
use axum::{body::HttpBody, extract::State, response::Html, routing::get, Router};
use http::StatusCode;
use std::sync::Arc;

pub fn create_router<B>() -> Router<AppState, B>
where
    B: HttpBody + Send + 'static,
{
    Router::new()
        .route("/", get(serve_shell))
        .fallback(serve_shell)
}

/// Serve the shell document.
///
/// Mounted at `/` and as the catch-all for every path no other route claims,
/// so client-side routing can take over after the initial page load. The
/// request path is never inspected.
#[tracing::instrument(skip(templates))]
async fn serve_shell(
    State(templates): State<Arc<TemplateStore>>,
) -> Result<Html<String>, StatusCode> {
    templates.load_shell().await.map(Html).map_err(|e| {
        tracing::error!(
            error.message = %e,
            error.cause_chain = ?e,
            "Failed to resolve the shell document"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
