//! # Schedcast API
//!
//! The local HTTP surface consumed by the external HTML/JS image renderer.
//! It mirrors the schedule document: `GET /api/config` returns it, `POST
//! /api/config` shallow-merges a patch into it and persists.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL structure
//! - **Handlers**: request processing against the shared [`ScheduleManager`]
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment-driven server settings
//!
//! CORS is wide open on purpose: the renderer typically runs from a
//! `file://` origin on the same machine.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use schedcast_store::ScheduleManager;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state handed to every request handler.
///
/// The manager is `None` until a document has been loaded; handlers report
/// that condition to callers rather than panicking. The `RwLock` serializes
/// writes from concurrent renderer requests, the single-writer discipline a
/// shared mutable document needs once it leaves a single-threaded editor.
pub struct ApiState {
    pub manager: RwLock<Option<ScheduleManager>>,
}

impl ApiState {
    pub fn new(manager: ScheduleManager) -> Self {
        Self {
            manager: RwLock::new(Some(manager)),
        }
    }

    /// State with no document loaded yet.
    pub fn uninitialized() -> Self {
        Self {
            manager: RwLock::new(None),
        }
    }
}

/// Builds the application router: config endpoints, health probes,
/// permissive CORS.
pub fn router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::config::routes())
        .with_state(state)
        .layer(cors)
}

/// Starts the API server with the provided configuration and manager.
///
/// Initializes tracing, binds the listener, and serves until the process
/// exits. The renderer polls `/api/config` from the browser, so this runs
/// for the lifetime of an editing session.
pub async fn start_server(config: config::ApiConfig, manager: ScheduleManager) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(manager));
    let app = router(state);

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Local server started on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
