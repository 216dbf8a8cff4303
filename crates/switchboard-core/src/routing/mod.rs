//! Intent routing: classify a message, fetch context, answer as a persona.
//!
//! - `classifier`: free text -> one label of a closed taxonomy
//! - `context`: search-first factual snippet with an LLM fallback
//! - `persona`: persona definitions and per-label preambles
//! - `generator`: the LLM call that writes the reply
//! - `router`: enum-indexed persona registry
//! - `prompt`: every prompt template in one place

pub mod classifier;
pub mod context;
pub mod generator;
pub mod persona;
pub mod prompt;
pub mod router;
