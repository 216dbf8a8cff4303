//! Interaction records: one row per processed customer message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum characters of context kept on a record or echoed to the caller.
pub const RECORD_CONTEXT_CHARS: usize = 200;

/// One processed customer message.
///
/// Created exactly once per request by the support pipeline and never
/// mutated afterwards. The interaction log owns every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Time-sortable identifier (UUID v7).
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub customer_id: String,
    pub customer_message: String,
    /// Resolved intent label (wire name).
    pub agent_type: String,
    /// Display name of the persona that answered.
    pub agent_name: String,
    pub response: String,
    /// Context snippet, truncated to [`RECORD_CONTEXT_CHARS`].
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<f64>,
}

/// Result of running one message through the support pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOutcome {
    pub agent_type: String,
    pub agent_name: String,
    pub response: String,
    pub context_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<f64>,
}

impl From<&InteractionRecord> for InteractionOutcome {
    fn from(record: &InteractionRecord) -> Self {
        Self {
            agent_type: record.agent_type.clone(),
            agent_name: record.agent_name.clone(),
            response: record.response.clone(),
            context_used: record.context.clone(),
            cost_estimate: record.cost_estimate,
        }
    }
}

/// Truncate `text` to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InteractionRecord {
        InteractionRecord {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            customer_id: "demo_cust_001".to_string(),
            customer_message: "Why is my bill so high?".to_string(),
            agent_type: "billing".to_string(),
            agent_name: "BillingAgent".to_string(),
            response: "Let me explain the charges.".to_string(),
            context: "Plans renew monthly.".to_string(),
            cost_estimate: None,
        }
    }

    #[test]
    fn test_truncate_chars_ascii() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let text = "héllo wörld";
        let truncated = truncate_chars(text, 7);
        assert_eq!(truncated, "héllo w");
        assert_eq!(truncated.chars().count(), 7);
    }

    #[test]
    fn test_record_omits_missing_cost() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("cost_estimate").is_none());
        assert_eq!(json["agent_type"], "billing");
        assert_eq!(json["customer_message"], "Why is my bill so high?");
    }

    #[test]
    fn test_outcome_from_record() {
        let mut rec = record();
        rec.cost_estimate = Some(0.0004);
        let outcome = InteractionOutcome::from(&rec);
        assert_eq!(outcome.agent_name, "BillingAgent");
        assert_eq!(outcome.context_used, rec.context);
        assert_eq!(outcome.cost_estimate, Some(0.0004));
    }
}
