//! POST /chat - run one customer message through the support pipeline.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use tracing::Instrument;

use switchboard_core::routing::persona::PersonaProfile;
use switchboard_observe::genai_attrs;
use switchboard_types::interaction::InteractionOutcome;

use crate::http::error::AppError;
use crate::state::AppState;

pub const DEFAULT_CUSTOMER_ID: &str = "demo_customer";

/// Request body shared by `/chat` and `/voice`.
#[derive(Debug, Deserialize)]
pub struct CustomerMessage {
    pub message: String,
    #[serde(default = "default_customer_id")]
    pub customer_id: String,
}

fn default_customer_id() -> String {
    DEFAULT_CUSTOMER_ID.to_string()
}

/// Run the pipeline on its own task so a panic inside it becomes a 500.
pub(crate) async fn run_pipeline<I: PersonaProfile>(
    state: &AppState<I>,
    request: CustomerMessage,
) -> Result<InteractionOutcome, AppError> {
    let span = tracing::info_span!(
        "handle_message",
        gen_ai.operation.name = genai_attrs::OP_HANDLE_MESSAGE,
        gen_ai.agent.name = tracing::field::Empty,
        switchboard.intent = tracing::field::Empty,
    );

    let service = state.service.clone();
    let outcome = tokio::spawn(
        async move {
            service
                .handle(&request.customer_id, &request.message)
                .await
        }
        .instrument(span.clone()),
    )
    .await
    .map_err(|e| AppError::Internal(format!("support pipeline failed: {e}")))?;

    span.record(genai_attrs::GEN_AI_AGENT_NAME, outcome.agent_name.as_str());
    span.record(genai_attrs::SWITCHBOARD_INTENT, outcome.agent_type.as_str());
    Ok(outcome)
}

pub async fn chat<I: PersonaProfile>(
    State(state): State<AppState<I>>,
    payload: Result<Json<CustomerMessage>, JsonRejection>,
) -> Result<Json<InteractionOutcome>, AppError> {
    let Json(request) = payload?;
    let outcome = run_pipeline(&state, request).await?;
    Ok(Json(outcome))
}
