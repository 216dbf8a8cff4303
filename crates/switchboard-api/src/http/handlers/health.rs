//! GET /health - liveness probe (no provider calls).

use axum::Json;
use serde_json::{Value, json};

use switchboard_types::intent::{Deployment, IntentLabel};

/// Display name reported by each deployment.
pub fn service_name(deployment: Deployment) -> &'static str {
    match deployment {
        Deployment::Support => "AI Customer Support Agent",
        Deployment::Sales => "AI Sales Support Agent",
    }
}

pub async fn health<I: IntentLabel>() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": service_name(I::DEPLOYMENT),
        "deployment": I::DEPLOYMENT,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
