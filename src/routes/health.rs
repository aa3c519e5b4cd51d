use axum::{body::HttpBody, routing::get, Router};
use http::StatusCode;

/// Create a router to serve health checks.
pub fn create_router<B>() -> Router<(), B>
where
    B: HttpBody + Send + 'static,
{
    Router::new().route("/", get(is_alive))
}

/// Simple `is_alive` endpoint that will always return a 200 OK.
/// Used to indicate when the webserver is up and running.
#[tracing::instrument]
async fn is_alive() -> StatusCode {
    tracing::debug!("Service is alive");
    StatusCode::OK
}
