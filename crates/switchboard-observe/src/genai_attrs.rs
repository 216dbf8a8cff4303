//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Field names for `Span::record` and operation-name values for spans that
//! wrap a customer interaction.

/// The display name of the agent that answered (persona name).
pub const GEN_AI_AGENT_NAME: &str = "gen_ai.agent.name";

/// The resolved intent label.
pub const SWITCHBOARD_INTENT: &str = "switchboard.intent";

// --- Operation name values ---

/// One customer message through the full pipeline.
pub const OP_HANDLE_MESSAGE: &str = "handle_message";

/// Text-to-speech for the voice endpoint.
pub const OP_SYNTHESIZE_SPEECH: &str = "synthesize_speech";
