//! GET /logs - every interaction recorded since startup.

use axum::Json;
use axum::extract::State;

use switchboard_core::interaction::log::LogSnapshot;
use switchboard_core::routing::persona::PersonaProfile;

use crate::state::AppState;

pub async fn list_logs<I: PersonaProfile>(State(state): State<AppState<I>>) -> Json<LogSnapshot> {
    let snapshot = state.service.log().list();
    tracing::info!(total = snapshot.total_interactions, "logs requested");
    Json(snapshot)
}
