//! Text-to-speech seam.
//!
//! [`speak`] is fail-open: the voice endpoint always returns its text reply,
//! and the audio fields report what happened.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use switchboard_types::error::SpeechError;

/// A text-to-speech backend (ElevenLabs in production).
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    /// Render `text` to audio bytes (MPEG).
    fn synthesize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SpeechError>> + Send + 'a>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOutcome {
    pub success: bool,
    pub message: String,
    pub audio: Option<Vec<u8>>,
}

impl SpeechOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            audio: None,
        }
    }
}

/// Synthesize `text`, converting every failure into an unsuccessful outcome.
#[tracing::instrument(name = "synthesize_speech", skip_all, fields(chars = text.chars().count()))]
pub async fn speak(
    synthesizer: Option<&dyn SpeechSynthesizer>,
    text: &str,
    timeout: Duration,
) -> SpeechOutcome {
    let Some(synthesizer) = synthesizer else {
        return SpeechOutcome::failed(SpeechError::NotConfigured.to_string());
    };

    let result = tokio::time::timeout(timeout, synthesizer.synthesize(text))
        .await
        .unwrap_or(Err(SpeechError::Timeout {
            after_ms: timeout.as_millis() as u64,
        }));

    match result {
        Ok(audio) => {
            tracing::info!(provider = synthesizer.name(), bytes = audio.len(), "audio generated");
            SpeechOutcome {
                success: true,
                message: "Audio generated".to_string(),
                audio: Some(audio),
            }
        }
        Err(e) => {
            tracing::warn!(provider = synthesizer.name(), error = %e, "speech synthesis failed");
            SpeechOutcome::failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSynth(Result<Vec<u8>, u16>);

    impl SpeechSynthesizer for FixedSynth {
        fn name(&self) -> &str {
            "fixed"
        }

        fn synthesize<'a>(
            &'a self,
            _text: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SpeechError>> + Send + 'a>> {
            let result = self.0.clone().map_err(|status| SpeechError::Status {
                status,
                body: "nope".to_string(),
            });
            Box::pin(async move { result })
        }
    }

    struct SlowSynth;

    impl SpeechSynthesizer for SlowSynth {
        fn name(&self) -> &str {
            "slow"
        }

        fn synthesize<'a>(
            &'a self,
            _text: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, SpeechError>> + Send + 'a>> {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            })
        }
    }

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn missing_synthesizer_reports_not_configured() {
        let outcome = speak(None, "hello", TIMEOUT).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "API key not configured");
        assert!(outcome.audio.is_none());
    }

    #[tokio::test]
    async fn success_carries_audio() {
        let synth = FixedSynth(Ok(vec![1, 2, 3]));
        let outcome = speak(Some(&synth), "hello", TIMEOUT).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Audio generated");
        assert_eq!(outcome.audio, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn provider_error_is_reported_not_raised() {
        let synth = FixedSynth(Err(401));
        let outcome = speak(Some(&synth), "hello", TIMEOUT).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("401"));
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let outcome = speak(Some(&SlowSynth), "hello", TIMEOUT).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("timed out"));
    }
}
