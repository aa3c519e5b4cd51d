use crate::state::AppState;
use axum::{body::HttpBody, Router};
use std::path::Path;
use tower_http::services::ServeDir;

pub mod health;
pub mod shell;

/// Assemble the routes for the application.
///
/// `/health` and `/static` are reserved prefixes and take precedence over the
/// shell's catch-all, which is registered as the router's fallback. A missing
/// file under `/static` is a 404, never the shell document.
pub fn build_router<B>(app_state: &AppState, assets_dir: &Path) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
{
    use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
    use tracing::Level;

    Router::new()
        .nest("/health", health::create_router())
        .nest_service("/static", ServeDir::new(assets_dir))
        .merge(shell::create_router().with_state(app_state.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
