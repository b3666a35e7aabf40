//! # brdoc-api: HTTP Service for Brazilian Document Numbers
//!
//! A thin Axum layer over `brdoc-core` for the web front end.
//!
//! ## API Surface
//!
//! | Path | Module | Purpose |
//! |------|--------|---------|
//! | `/health/liveness` | this crate | Liveness probe |
//! | `/v1/documents/*` | [`routes::documents`] | Catalogue, generation, validation |
//! | `/openapi.json` | [`openapi`] | OpenAPI spec |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::documents::router())
        .merge(openapi::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Router::new()
        .route("/health/liveness", get(liveness))
        .merge(api)
}

/// GET /health/liveness: the process is up.
async fn liveness() -> &'static str {
    "ok"
}
