//! IntentClassifier -- maps free text to one label of a closed taxonomy.
//!
//! The classifier never fails. Ambiguous or unexpected model output, a
//! provider error, or a missing credential all resolve to the taxonomy's
//! catch-all label.

use std::marker::PhantomData;
use std::sync::Arc;

use switchboard_types::intent::IntentLabel;
use switchboard_types::interaction::truncate_chars;
use switchboard_types::llm::{LlmError, MeteredUsage};

use crate::llm::client::LlmClient;

use super::prompt::classification_prompt;

/// A label plus the usage of the call that produced it (if any).
#[derive(Debug, Clone)]
pub struct Classification<I> {
    pub label: I,
    pub usage: Option<MeteredUsage>,
}

/// Normalize raw model output and accept it only as an exact label.
pub fn parse_label<I: IntentLabel>(raw: &str) -> Option<I> {
    raw.trim().to_lowercase().parse().ok()
}

#[derive(Debug)]
pub struct IntentClassifier<I> {
    llm: Arc<LlmClient>,
    _taxonomy: PhantomData<fn() -> I>,
}

impl<I: IntentLabel> IntentClassifier<I> {
    pub fn new(llm: Arc<LlmClient>) -> Self {
        Self {
            llm,
            _taxonomy: PhantomData,
        }
    }

    pub async fn classify(&self, message: &str) -> I {
        self.classify_metered(message).await.label
    }

    #[tracing::instrument(
        name = "classify_intent",
        skip(self, message),
        fields(deployment = %I::DEPLOYMENT)
    )]
    pub async fn classify_metered(&self, message: &str) -> Classification<I> {
        let prompt = classification_prompt::<I>(message);

        match self.llm.prompt(&prompt).await {
            Ok(completion) => {
                let label = parse_label::<I>(&completion.text).unwrap_or_else(|| {
                    tracing::warn!(
                        raw = %truncate_chars(completion.text.trim(), 50),
                        fallback = %I::CATCH_ALL,
                        "unrecognized classification"
                    );
                    I::CATCH_ALL
                });
                Classification {
                    label,
                    usage: Some(completion.metered),
                }
            }
            Err(LlmError::NotConfigured) => {
                tracing::warn!("no LLM configured; classifying as catch-all");
                Classification {
                    label: I::CATCH_ALL,
                    usage: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "classification failed");
                Classification {
                    label: I::CATCH_ALL,
                    usage: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, MockFailure, MockProvider};
    use switchboard_types::intent::{SalesIntent, SupportIntent};

    fn classifier_replying(reply: &str) -> IntentClassifier<SupportIntent> {
        IntentClassifier::new(testing::client(MockProvider::ok("gemini", reply)))
    }

    #[test]
    fn parse_label_normalizes_case_and_whitespace() {
        assert_eq!(parse_label::<SupportIntent>("  Billing\n"), Some(SupportIntent::Billing));
        assert_eq!(
            parse_label::<SupportIntent>("TECHNICAL_SUPPORT"),
            Some(SupportIntent::TechnicalSupport)
        );
        assert_eq!(parse_label::<SalesIntent>("promotion"), Some(SalesIntent::Promotion));
    }

    #[test]
    fn parse_label_rejects_partial_matches() {
        assert_eq!(parse_label::<SupportIntent>("billing."), None);
        assert_eq!(parse_label::<SupportIntent>("technical support"), None);
        assert_eq!(parse_label::<SalesIntent>("billing"), None);
    }

    #[tokio::test]
    async fn classify_exact_label() {
        assert_eq!(classifier_replying("billing").classify("x").await, SupportIntent::Billing);
    }

    #[tokio::test]
    async fn classify_hedged_reply_falls_back_to_other() {
        let label = classifier_replying("I think it's billing-ish").classify("x").await;
        assert_eq!(label, SupportIntent::Other);
    }

    #[tokio::test]
    async fn classify_provider_error_falls_back_to_other() {
        let classifier: IntentClassifier<SalesIntent> = IntentClassifier::new(testing::client(
            MockProvider::failing("gemini", MockFailure::Overloaded),
        ));
        let result = classifier.classify_metered("new phone").await;
        assert_eq!(result.label, SalesIntent::Other);
        assert!(result.usage.is_none());
    }

    #[tokio::test]
    async fn classify_without_credential_falls_back_to_other() {
        let classifier: IntentClassifier<SupportIntent> =
            IntentClassifier::new(testing::unconfigured());
        assert_eq!(classifier.classify("anything").await, SupportIntent::Other);
    }

    #[tokio::test]
    async fn classify_sends_taxonomy_prompt() {
        let provider = MockProvider::ok("gemini", "upgrade");
        let prompts = provider.prompts();
        let classifier: IntentClassifier<SalesIntent> =
            IntentClassifier::new(testing::client(provider));

        let result = classifier.classify_metered("Can I get a newer phone?").await;
        assert_eq!(result.label, SalesIntent::Upgrade);
        assert_eq!(result.usage.unwrap().provider, "gemini");
        assert!(prompts.lock().unwrap()[0].contains("new_customer, upgrade, device_inquiry"));
    }
}
