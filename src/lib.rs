pub mod configuration;
mod error;
mod routes;
#[cfg(feature = "lambda")]
pub mod serverless;
mod state;
pub mod telemetry;
pub mod templates;

use axum::{body::HttpBody, routing::IntoMakeService, Router, Server};
use configuration::Settings;
use hyper::server::conn::AddrIncoming;
use state::AppState;
use std::net::TcpListener;
use templates::TemplateStore;

/// The static shell application: every unreserved path serves the same
/// pre-authored HTML document.
pub struct App {
    port: u16,
    server: Server<AddrIncoming, IntoMakeService<Router>>,
}

impl App {
    /// Bind to the configured address and prepare the app for
    /// [`App::run_until_stopped`].
    pub fn build(configuration: Settings) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(configuration.application.address())?;
        Self::from_listener(listener, configuration)
    }

    /// Build the app on an already bound [`TcpListener`]. The test suite uses
    /// this to bind to a random port.
    pub fn from_listener(listener: TcpListener, configuration: Settings) -> anyhow::Result<Self> {
        let port = listener.local_addr()?.port();
        let router: Router = Self::router(&configuration);
        let server = Server::from_tcp(listener)?.serve(router.into_make_service());

        Ok(Self { port, server })
    }

    /// The port this app is bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Server running on port {}", self.port);
        self.server.await?;
        Ok(())
    }

    /// Build the router for the application. Shared between the long-running
    /// server and the serverless entry point, so it is generic over the
    /// request body: hyper connections carry `hyper::Body`, Lambda
    /// invocations carry `lambda_http::Body`.
    pub fn router<B>(configuration: &Settings) -> Router<(), B>
    where
        B: HttpBody + Send + 'static,
    {
        let app_state = AppState::create(TemplateStore::new(
            configuration.templates.dir.clone(),
            configuration.templates.document.clone(),
        ));

        routes::build_router(&app_state, &configuration.assets.dir)
    }
}
