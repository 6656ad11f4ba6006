//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the axum Router with the vanity handler on every path
//! - Wire up middleware (tracing)
//! - Resolve request paths against the configured set
//! - Emit the meta-tag document and Cache-Control header
//!
//! # Design Decisions
//! - One handler for all paths; resolution happens in the routing subsystem
//! - Resolution misses are expected traffic: 404, logged at debug only
//! - The root path with no catch-all entry serves an index of all modules

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::VanityConfig;
use crate::http::page::{doc_url, index_page, PackagePage};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<VanityConfig>,
}

/// HTTP server for the vanity import host.
pub struct VanityServer {
    router: Router,
}

impl VanityServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Arc<VanityConfig>) -> Self {
        Self {
            router: build_router(config),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the axum router: every path funnels into the vanity handler.
pub fn build_router(config: Arc<VanityConfig>) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/", any(vanity_handler))
        .route("/{*path}", any(vanity_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Main request handler: resolve the path and render the meta-tag page.
async fn vanity_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let config = &state.config;
    let path = request.uri().path();

    let Some((pc, subpath)) = config.paths.find(path) else {
        if path == "/" {
            let host = request_host(config, &request);
            return Html(index_page(&host, &config.paths)).into_response();
        }
        tracing::debug!(path = %path, "no vanity path matched");
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let host = request_host(config, &request);
    let module = format!("{host}{}", pc.path);
    let redirect = doc_url(&module, subpath, pc.default_version.as_deref());

    tracing::debug!(
        path = %path,
        module = %module,
        subpath = %subpath,
        "resolved vanity path"
    );

    let page = PackagePage {
        module: &module,
        vcs: pc.vcs,
        repo: &pc.repo,
        display: pc.display.as_deref(),
        redirect: &redirect,
    }
    .render();

    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", config.cache_max_age),
        )],
        Html(page),
    )
        .into_response()
}

/// Configured host wins; otherwise fall back to the request's Host header.
fn request_host(config: &VanityConfig, request: &Request<Body>) -> String {
    if let Some(host) = &config.host {
        return host.clone();
    }
    request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
