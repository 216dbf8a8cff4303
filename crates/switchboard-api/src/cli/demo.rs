//! `switchboard demo` - scripted conversations against the live pipeline.
//!
//! Runs without the HTTP server. Each scenario is one customer message;
//! afterwards the interaction log is summarized.

use anyhow::Result;
use console::style;
use serde::Serialize;

use switchboard_core::routing::persona::PersonaProfile;
use switchboard_types::interaction::{InteractionOutcome, truncate_chars};

use super::ask::print_outcome;
use crate::http::handlers::health::service_name;
use crate::state::AppState;

/// Log entries shown after the scenarios.
const SAMPLE_LOG_ENTRIES: usize = 3;

pub struct Scenario {
    pub title: &'static str,
    pub customer_id: &'static str,
    pub message: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "Billing Question",
        customer_id: "demo_cust_001",
        message: "Why is my bill so high this month? I usually pay $80 but now it's $120.",
    },
    Scenario {
        title: "Sales Question",
        customer_id: "demo_cust_002",
        message: "I'm interested in your 5G unlimited plan. What's the difference from my current plan?",
    },
    Scenario {
        title: "Technical Support",
        customer_id: "demo_cust_003",
        message: "My phone keeps dropping calls. What should I do?",
    },
    Scenario {
        title: "Miscellaneous Question",
        customer_id: "demo_cust_004",
        message: "Do you have any promotions running right now?",
    },
];

#[derive(Serialize)]
struct ScenarioResult<'a> {
    title: &'a str,
    customer_id: &'a str,
    message: &'a str,
    #[serde(flatten)]
    outcome: InteractionOutcome,
}

pub async fn demo<I: PersonaProfile>(state: &AppState<I>, json: bool) -> Result<()> {
    if !json {
        section(&format!("{} - Demo", service_name(I::DEPLOYMENT)));
        println!("  Deployment: {}", style(I::DEPLOYMENT).cyan());
    }

    let mut results = Vec::with_capacity(SCENARIOS.len());
    for (n, scenario) in SCENARIOS.iter().enumerate() {
        if !json {
            section(&format!("Scenario {}: {}", n + 1, scenario.title));
            println!("  {} {}", style("Customer:").dim(), scenario.message);
        }

        let outcome = state
            .service
            .handle(scenario.customer_id, scenario.message)
            .await;

        if !json {
            print_outcome(&outcome, true);
        }
        results.push(ScenarioResult {
            title: scenario.title,
            customer_id: scenario.customer_id,
            message: scenario.message,
            outcome,
        });
    }

    let snapshot = state.service.log().list();

    if json {
        let report = serde_json::json!({
            "deployment": I::DEPLOYMENT,
            "scenarios": results,
            "total_interactions": snapshot.total_interactions,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section("Interaction Logs");
    println!(
        "  Total interactions: {}",
        style(snapshot.total_interactions).bold()
    );
    for (n, record) in snapshot.logs.iter().take(SAMPLE_LOG_ENTRIES).enumerate() {
        println!();
        println!(
            "  {}. {}...",
            n + 1,
            truncate_chars(&record.customer_message, 60)
        );
        println!("     {} {}", style("Agent:").dim(), record.agent_name);
        println!(
            "     {} {}...",
            style("Response:").dim(),
            truncate_chars(&record.response, 80)
        );
        println!(
            "     {} {}",
            style("Timestamp:").dim(),
            record.timestamp.to_rfc3339()
        );
    }
    println!();
    Ok(())
}

fn section(title: &str) {
    println!();
    println!("  {}", style(format!("── {title} ──")).dim());
    println!();
}
