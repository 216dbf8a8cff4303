//! Shared domain types for Switchboard.
//!
//! This crate contains the domain types used across the Switchboard crates:
//! intent taxonomies, LLM request/response shapes, interaction records,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod intent;
pub mod interaction;
pub mod llm;
