//! POST /voice - the `/chat` reply plus synthesized audio when available.
//!
//! Speech failures never fail the request; they show up as
//! `audio_available: false` with the reason in `audio_message`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::Instrument;

use switchboard_core::routing::persona::PersonaProfile;
use switchboard_core::speech::speak;
use switchboard_observe::genai_attrs;
use switchboard_types::interaction::InteractionOutcome;

use super::chat::{CustomerMessage, run_pipeline};
use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    #[serde(flatten)]
    pub outcome: InteractionOutcome,
    /// Same text as `response`, kept for voice clients.
    pub text_response: String,
    pub audio_available: bool,
    pub audio_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
}

pub async fn voice<I: PersonaProfile>(
    State(state): State<AppState<I>>,
    payload: Result<Json<CustomerMessage>, JsonRejection>,
) -> Result<Json<VoiceResponse>, AppError> {
    let Json(request) = payload?;
    let outcome = run_pipeline(&state, request).await?;

    let speech = speak(
        state.speech.as_deref(),
        &outcome.response,
        state.request_timeout(),
    )
    .instrument(tracing::info_span!(
        "voice",
        gen_ai.operation.name = genai_attrs::OP_SYNTHESIZE_SPEECH
    ))
    .await;

    Ok(Json(VoiceResponse {
        text_response: outcome.response.clone(),
        outcome,
        audio_available: speech.success,
        audio_message: speech.message,
        audio_base64: speech.audio.map(|bytes| STANDARD.encode(bytes)),
    }))
}
