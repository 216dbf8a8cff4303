//! Axum router configuration with middleware.
//!
//! Routes sit at the root: `/chat`, `/voice`, `/logs`, `/health`.
//! Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use switchboard_core::routing::persona::PersonaProfile;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router for the deployment `I`.
pub fn build_router<I: PersonaProfile>(state: AppState<I>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat::<I>))
        .route("/voice", post(handlers::voice::voice::<I>))
        .route("/logs", get(handlers::logs::list_logs::<I>))
        .route("/health", get(handlers::health::health::<I>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
