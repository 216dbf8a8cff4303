//! Prompt templates for classification, context lookup and reply generation.
//!
//! Each deployment phrases its prompts slightly differently: the support desk
//! asks for account and policy facts and a professional tone, the sales desk
//! asks for plan and device specs and a persuasive tone.

use switchboard_types::intent::{Deployment, IntentLabel};

/// Single-word classification prompt listing every label of `I`.
pub fn classification_prompt<I: IntentLabel>(message: &str) -> String {
    let (subject, focus) = match I::DEPLOYMENT {
        Deployment::Support => ("customer message", "primary intent"),
        Deployment::Sales => ("sales-related customer message", "primary sales intent"),
    };
    format!(
        "Classify this {subject} as ONE of: {labels}. Focus on the {focus} only. \
         Reply with ONLY the classification (one word).\n\nMessage: {message}",
        labels = I::label_list(),
    )
}

/// Concise factual lookup prompt sent to the search provider (or its fallback).
pub fn context_prompt(deployment: Deployment, query: &str) -> String {
    match deployment {
        Deployment::Support => format!(
            "Provide accurate information about: {query}\n\
             Focus on facts, not recommendations.\n\
             Keep response concise (2-3 sentences max).\n\
             Include relevant details like account status, plan details, policies if applicable."
        ),
        Deployment::Sales => format!(
            "Provide general factual information about typical telecom plans or devices regarding: {query}\n\
             Focus on specs, features, or general market offerings.\n\
             Keep response concise (2-3 sentences max)."
        ),
    }
}

/// Reply prompt: persona preamble, context, the customer's message, closing line.
pub fn reply_prompt(deployment: Deployment, preamble: &str, context: &str, message: &str) -> String {
    let (context_heading, closing) = match deployment {
        Deployment::Support => (
            "Customer context:",
            "Provide a helpful, professional response.",
        ),
        Deployment::Sales => (
            "Context (General Info):",
            "Provide a helpful, persuasive response.",
        ),
    };
    format!("{preamble}\n\n{context_heading} {context}\n\nCustomer message: {message}\n\n{closing}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_types::intent::{SalesIntent, SupportIntent};

    #[test]
    fn support_classification_prompt_lists_labels() {
        let prompt = classification_prompt::<SupportIntent>("My bill is wrong");
        assert!(prompt.starts_with(
            "Classify this customer message as ONE of: billing, sales, technical_support, other."
        ));
        assert!(prompt.contains("Reply with ONLY the classification (one word)."));
        assert!(prompt.ends_with("Message: My bill is wrong"));
    }

    #[test]
    fn sales_classification_prompt_lists_labels() {
        let prompt = classification_prompt::<SalesIntent>("new phone?");
        assert!(prompt.contains(
            "ONE of: new_customer, upgrade, device_inquiry, promotion, other."
        ));
        assert!(prompt.contains("primary sales intent"));
    }

    #[test]
    fn context_prompts_differ_by_deployment() {
        let support = context_prompt(Deployment::Support, "roaming fees");
        let sales = context_prompt(Deployment::Sales, "5G plans");
        assert!(support.starts_with("Provide accurate information about: roaming fees"));
        assert!(support.contains("account status"));
        assert!(sales.contains("regarding: 5G plans"));
        assert!(sales.contains("specs, features"));
    }

    #[test]
    fn reply_prompt_layout() {
        let prompt = reply_prompt(Deployment::Support, "You are X.", "ctx", "msg");
        assert_eq!(
            prompt,
            "You are X.\n\nCustomer context: ctx\n\nCustomer message: msg\n\n\
             Provide a helpful, professional response."
        );
        let sales = reply_prompt(Deployment::Sales, "You are Y.", "ctx", "msg");
        assert!(sales.contains("Context (General Info): ctx"));
        assert!(sales.ends_with("Provide a helpful, persuasive response."));
    }
}
