//! Cost estimation for metered LLM calls.
//!
//! A built-in pricing table for the models this service talks to, with user
//! overrides from the config file. Estimates are approximate and rendered
//! with a leading `~` by [`format_cost`].

use switchboard_types::config::ProviderPricing;
use switchboard_types::llm::MeteredUsage;

struct PricingEntry {
    provider: &'static str,
    model_pattern: &'static str,
    input_cost_per_million: f64,
    output_cost_per_million: f64,
}

/// Conservative fallback pricing when no model match is found.
const FALLBACK_INPUT_COST: f64 = 5.0;
const FALLBACK_OUTPUT_COST: f64 = 15.0;

/// Built-in table, USD per million tokens. More specific patterns come first.
const DEFAULT_PRICING: &[PricingEntry] = &[
    // Google (OpenAI-compatible endpoint)
    PricingEntry {
        provider: "gemini",
        model_pattern: "gemini-2.0-flash-lite",
        input_cost_per_million: 0.075,
        output_cost_per_million: 0.30,
    },
    PricingEntry {
        provider: "gemini",
        model_pattern: "gemini-2.0-flash",
        input_cost_per_million: 0.10,
        output_cost_per_million: 0.40,
    },
    PricingEntry {
        provider: "gemini",
        model_pattern: "gemini-2.5-flash",
        input_cost_per_million: 0.30,
        output_cost_per_million: 2.50,
    },
    PricingEntry {
        provider: "gemini",
        model_pattern: "gemini-2.5-pro",
        input_cost_per_million: 1.25,
        output_cost_per_million: 10.0,
    },
    // Perplexity
    PricingEntry {
        provider: "perplexity",
        model_pattern: "sonar-pro",
        input_cost_per_million: 3.0,
        output_cost_per_million: 15.0,
    },
    PricingEntry {
        provider: "perplexity",
        model_pattern: "sonar",
        input_cost_per_million: 1.0,
        output_cost_per_million: 1.0,
    },
    // OpenAI
    PricingEntry {
        provider: "openai",
        model_pattern: "gpt-4o-mini",
        input_cost_per_million: 0.15,
        output_cost_per_million: 0.60,
    },
    PricingEntry {
        provider: "openai",
        model_pattern: "gpt-4o",
        input_cost_per_million: 2.50,
        output_cost_per_million: 10.0,
    },
    // Mistral
    PricingEntry {
        provider: "mistral",
        model_pattern: "mistral-large",
        input_cost_per_million: 2.0,
        output_cost_per_million: 6.0,
    },
];

/// Prefix match after dropping Gemini's `models/` resource prefix.
fn matches_pattern(model: &str, pattern: &str) -> bool {
    model
        .strip_prefix("models/")
        .unwrap_or(model)
        .starts_with(pattern)
}

/// Estimate the cost of a single call in USD.
///
/// Lookup order:
/// 1. User-defined pricing overrides from the config file
/// 2. Built-in pricing table
/// 3. Conservative fallback ($5.00 / $15.00 per million tokens)
pub fn estimate_cost(
    input_tokens: u32,
    output_tokens: u32,
    model: &str,
    provider: &str,
    user_pricing: &[ProviderPricing],
) -> f64 {
    if let Some(pricing) = user_pricing
        .iter()
        .find(|p| p.provider_name == provider && matches_pattern(model, &p.model_pattern))
    {
        return compute_cost(
            input_tokens,
            output_tokens,
            pricing.input_cost_per_million,
            pricing.output_cost_per_million,
        );
    }

    if let Some(entry) = DEFAULT_PRICING
        .iter()
        .find(|e| e.provider == provider && matches_pattern(model, e.model_pattern))
    {
        return compute_cost(
            input_tokens,
            output_tokens,
            entry.input_cost_per_million,
            entry.output_cost_per_million,
        );
    }

    compute_cost(input_tokens, output_tokens, FALLBACK_INPUT_COST, FALLBACK_OUTPUT_COST)
}

/// Sum the estimated cost of every metered call in one interaction.
///
/// Returns `None` when nothing was metered (all providers unconfigured or
/// failing), so callers can omit the field instead of reporting `$0`.
pub fn estimate_interaction_cost(
    metered: &[MeteredUsage],
    user_pricing: &[ProviderPricing],
) -> Option<f64> {
    if metered.is_empty() {
        return None;
    }
    Some(
        metered
            .iter()
            .map(|m| {
                estimate_cost(
                    m.usage.input_tokens,
                    m.usage.output_tokens,
                    &m.model,
                    &m.provider,
                    user_pricing,
                )
            })
            .sum(),
    )
}

fn compute_cost(
    input_tokens: u32,
    output_tokens: u32,
    input_cost_per_million: f64,
    output_cost_per_million: f64,
) -> f64 {
    let input_cost = (input_tokens as f64 / 1_000_000.0) * input_cost_per_million;
    let output_cost = (output_tokens as f64 / 1_000_000.0) * output_cost_per_million;
    input_cost + output_cost
}

/// Format a cost estimate as a human-readable string.
///
/// - Costs below $0.01 use 4 decimal places: `~$0.0003`
/// - Costs $0.01 and above use 2 decimal places: `~$0.12`
pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("~${cost:.4}")
    } else {
        format!("~${cost:.2}")
    }
}
