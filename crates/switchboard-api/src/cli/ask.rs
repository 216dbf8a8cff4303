//! `switchboard ask` - one message through the pipeline, printed to stdout.

use anyhow::Result;
use console::style;

use switchboard_core::llm::pricing::format_cost;
use switchboard_core::routing::persona::PersonaProfile;
use switchboard_types::interaction::{InteractionOutcome, truncate_chars};

use crate::state::AppState;

/// Characters of a reply shown in styled output before eliding.
pub(crate) const REPLY_PREVIEW_CHARS: usize = 200;

pub async fn ask<I: PersonaProfile>(
    state: &AppState<I>,
    customer_id: &str,
    message: &str,
    json: bool,
) -> Result<()> {
    let outcome = state.service.handle(customer_id, message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("Customer:").dim(), message);
    print_outcome(&outcome, false);
    println!();
    Ok(())
}

/// Styled rendering of one outcome; `preview` elides long replies.
pub(crate) fn print_outcome(outcome: &InteractionOutcome, preview: bool) {
    println!();
    println!(
        "  {} {} {}",
        style("Agent:").dim(),
        style(&outcome.agent_name).cyan().bold(),
        style(format!("({})", outcome.agent_type)).dim()
    );

    let response = if preview && outcome.response.chars().count() > REPLY_PREVIEW_CHARS {
        format!("{}...", truncate_chars(&outcome.response, REPLY_PREVIEW_CHARS))
    } else {
        outcome.response.clone()
    };
    println!("  {} {}", style("Response:").dim(), response);
    println!("  {} {}", style("Context:").dim(), style(&outcome.context_used).dim());

    match outcome.cost_estimate {
        Some(cost) => println!("  {} {}", style("Cost:").dim(), style(format_cost(cost)).yellow()),
        None => println!("  {} {}", style("Cost:").dim(), style("n/a").dim()),
    }
}
