//! Application state wiring providers into the support pipeline.
//!
//! AppState holds the concrete service instances used by both CLI commands
//! and REST handlers. It is generic over the deployment's intent taxonomy;
//! `main` picks the taxonomy once from configuration.

use std::sync::Arc;
use std::time::Duration;

use switchboard_core::interaction::log::InteractionLog;
use switchboard_core::interaction::service::SupportService;
use switchboard_core::routing::persona::PersonaProfile;
use switchboard_core::speech::SpeechSynthesizer;
use switchboard_infra::config::ProviderCredentials;
use switchboard_infra::llm::{chat_client, search_client};
use switchboard_infra::speech::ElevenLabsSynthesizer;
use switchboard_types::config::AppConfig;

/// Shared application state. Cheap to clone; everything sits behind `Arc`.
pub struct AppState<I> {
    pub service: Arc<SupportService<I>>,
    pub speech: Option<Arc<dyn SpeechSynthesizer>>,
    pub config: Arc<AppConfig>,
}

impl<I> Clone for AppState<I> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            speech: self.speech.clone(),
            config: self.config.clone(),
        }
    }
}

impl<I: PersonaProfile> AppState<I> {
    pub fn new(
        service: Arc<SupportService<I>>,
        speech: Option<Arc<dyn SpeechSynthesizer>>,
        config: AppConfig,
    ) -> Self {
        Self {
            service,
            speech,
            config: Arc::new(config),
        }
    }

    /// Build providers from configuration and environment credentials.
    ///
    /// Missing keys never fail startup; the affected provider is disabled
    /// and its component falls back to its documented default.
    pub fn init(config: AppConfig, credentials: &ProviderCredentials) -> Self {
        let llm = Arc::new(chat_client(&config, credentials.llm.as_ref()));
        let search = Arc::new(search_client(&config, credentials.search.as_ref()));
        let log = Arc::new(InteractionLog::new());

        let service = Arc::new(SupportService::new(
            llm,
            search,
            log,
            config.provider_pricing.clone(),
        ));

        let speech = credentials.speech.clone().and_then(|key| {
            match ElevenLabsSynthesizer::new(key, &config.speech, request_timeout(&config)) {
                Ok(synth) => Some(Arc::new(synth) as Arc<dyn SpeechSynthesizer>),
                Err(e) => {
                    tracing::error!(error = %e, "failed to create speech client");
                    None
                }
            }
        });
        if speech.is_none() {
            tracing::warn!("ELEVENLABS_API_KEY not set; text-to-speech unavailable");
        }

        Self::new(service, speech, config)
    }

    pub fn request_timeout(&self) -> Duration {
        request_timeout(&self.config)
    }
}

fn request_timeout(config: &AppConfig) -> Duration {
    Duration::from_secs(config.request_timeout_secs)
}
