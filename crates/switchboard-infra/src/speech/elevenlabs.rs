//! ElevenLabsSynthesizer -- [`SpeechSynthesizer`] backed by the ElevenLabs
//! text-to-speech API (`POST /v1/text-to-speech/{voice_id}`).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use switchboard_core::speech::SpeechSynthesizer;
use switchboard_types::config::SpeechSettings;
use switchboard_types::error::SpeechError;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// ElevenLabs client. Does NOT derive Debug; it holds the API key.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    voice_id: String,
    model_id: String,
    timeout: Duration,
}

impl ElevenLabsSynthesizer {
    pub fn new(
        api_key: SecretString,
        settings: &SpeechSettings,
        timeout: Duration,
    ) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechError::Request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            voice_id: settings.voice_id.clone(),
            model_id: settings.model_id.clone(),
            timeout,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            self.voice_id
        )
    }

    async fn request_audio(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let body = TextToSpeechRequest {
            text,
            model_id: &self.model_id,
        };

        let response = self
            .client
            .post(self.url())
            .header("xi-api-key", self.api_key.expose_secret())
            .header("accept", "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout {
                        after_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    SpeechError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Request(e.to_string()))?;
        Ok(audio.to_vec())
    }
}

impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn name(&self) -> &str {
        "elevenlabs"
    }

    fn synthesize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SpeechError>> + Send + 'a>> {
        Box::pin(self.request_audio(text))
    }
}
