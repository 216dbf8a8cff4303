//! PersonaRouter -- the persona registry for one deployment.
//!
//! Built once at startup with exactly one persona per label, stored in a
//! `Vec` indexed by [`IntentLabel::index`]. Shared behind an `Arc`.

use std::sync::Arc;

use switchboard_types::llm::MeteredUsage;

use crate::llm::client::LlmClient;

use super::context::ContextProvider;
use super::persona::{Persona, PersonaProfile};

/// What the router produced for one message.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub persona_name: &'static str,
    pub response: String,
    pub usage: Vec<MeteredUsage>,
    /// The reply was cut off at the token limit.
    pub truncated: bool,
}

#[derive(Debug)]
pub struct PersonaRouter<I> {
    personas: Vec<Persona<I>>,
    context: ContextProvider,
}

impl<I: PersonaProfile> PersonaRouter<I> {
    /// Register one persona for every label of `I`.
    pub fn new(llm: Arc<LlmClient>, context: ContextProvider) -> Self {
        let personas = I::ALL
            .iter()
            .map(|label| Persona::new(*label, llm.clone()))
            .collect();
        Self { personas, context }
    }

    /// The persona for `label`, or the catch-all persona if none is registered.
    pub fn persona(&self, label: I) -> &Persona<I> {
        match self.personas.get(label.index()) {
            Some(persona) => persona,
            // `new` registers every label, so the catch-all slot always exists.
            None => &self.personas[I::CATCH_ALL.index()],
        }
    }

    pub fn personas(&self) -> &[Persona<I>] {
        &self.personas
    }

    /// Fetch context for `message`, then answer as the persona for `label`.
    pub async fn route(&self, label: I, message: &str) -> RouteOutcome {
        let snippet = self.context.fetch(message).await;
        let mut outcome = self.route_with_context(label, message, &snippet.text).await;
        outcome.usage.splice(0..0, snippet.usage);
        outcome
    }

    /// Answer with a context snippet the caller already fetched.
    #[tracing::instrument(
        name = "generate_reply",
        skip(self, message, context),
        fields(intent = %label)
    )]
    pub async fn route_with_context(
        &self,
        label: I,
        message: &str,
        context: &str,
    ) -> RouteOutcome {
        let persona = self.persona(label);
        tracing::info!(persona = persona.name(), "routing to persona");

        let reply = persona.process_metered(message, context).await;
        RouteOutcome {
            persona_name: persona.name(),
            response: reply.text,
            usage: reply.usage.into_iter().collect(),
            truncated: reply.truncated,
        }
    }
}
