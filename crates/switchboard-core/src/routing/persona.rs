//! Personas: one named responder per intent label.
//!
//! A persona is a display name, the label it serves, and a role preamble.
//! Personas hold no per-request state; the same instance answers every
//! message routed to its label.

use std::sync::Arc;

use switchboard_types::intent::{IntentLabel, SalesIntent, SupportIntent};

use crate::llm::client::LlmClient;

use super::generator::{Reply, ResponseGenerator};

/// Per-label persona identity: display name and role preamble.
pub trait PersonaProfile: IntentLabel {
    fn persona_name(&self) -> &'static str;

    fn preamble(&self) -> &'static str;
}

impl PersonaProfile for SupportIntent {
    fn persona_name(&self) -> &'static str {
        match self {
            SupportIntent::Billing => "BillingAgent",
            SupportIntent::Sales => "SalesAgent",
            SupportIntent::TechnicalSupport => "TechSupportAgent",
            SupportIntent::Other => "GeneralAgent",
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            SupportIntent::Billing => {
                "You are a billing support agent for a major telecom provider. \
                 Be helpful, professional, and concise. Explain charges clearly and offer solutions."
            }
            SupportIntent::Sales => {
                "You are a sales agent for a major telecom provider. \
                 Help customers understand plans and benefits. Be persuasive but honest."
            }
            SupportIntent::TechnicalSupport => {
                "You are a technical support agent for a major telecom provider. \
                 Help customers troubleshoot issues. Provide clear, step-by-step guidance."
            }
            SupportIntent::Other => {
                "You are a customer service agent for a major telecom provider. \
                 Help the customer efficiently and professionally."
            }
        }
    }
}

impl PersonaProfile for SalesIntent {
    fn persona_name(&self) -> &'static str {
        match self {
            SalesIntent::NewCustomer => "NewCustomerAgent",
            SalesIntent::Upgrade => "UpgradeAgent",
            SalesIntent::DeviceInquiry => "DeviceAgent",
            SalesIntent::Promotion => "PromotionAgent",
            SalesIntent::Other => "GeneralSalesAgent",
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            SalesIntent::NewCustomer => {
                "You are a New Customer Specialist. Welcome the user and highlight the \
                 benefits of joining our service. Be enthusiastic and persuasive."
            }
            SalesIntent::Upgrade => {
                "You are an Upgrade Specialist. Help existing customers find better plans \
                 or newer devices. Focus on value and loyalty benefits."
            }
            SalesIntent::DeviceInquiry => {
                "You are a Device Expert. Provide detailed, accurate info about smartphones, \
                 tablets, and accessories. Compare features if asked."
            }
            SalesIntent::Promotion => {
                "You are a Promotions Specialist. Explain current deals, bundles, and \
                 limited-time offers clearly. Create a sense of urgency."
            }
            SalesIntent::Other => {
                "You are a General Sales Agent. Assist with any sales-related inquiries \
                 professionally and persuasively."
            }
        }
    }
}

/// A named responder bound to one intent label.
#[derive(Debug, Clone)]
pub struct Persona<I> {
    name: &'static str,
    role: I,
    generator: ResponseGenerator,
}

impl<I: PersonaProfile> Persona<I> {
    pub fn new(role: I, llm: Arc<LlmClient>) -> Self {
        Self {
            name: role.persona_name(),
            role,
            generator: ResponseGenerator::new(I::DEPLOYMENT, llm),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> I {
        self.role
    }

    /// Answer `message` given `context`. Never empty.
    pub async fn process(&self, message: &str, context: &str) -> String {
        self.process_metered(message, context).await.text
    }

    pub async fn process_metered(&self, message: &str, context: &str) -> Reply {
        self.generator
            .generate(self.role.preamble(), message, context)
            .await
    }
}
