//! LLM provider abstractions for Switchboard.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `LlmClient`: optional provider + model defaults + per-call timeout
//! - `pricing`: cost estimation from metered usage

pub mod box_provider;
pub mod client;
pub mod pricing;
pub mod provider;
