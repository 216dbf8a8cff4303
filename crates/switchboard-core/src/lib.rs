//! Business logic and provider trait definitions for Switchboard.
//!
//! This crate defines the "ports" (provider traits) that the infrastructure
//! layer implements, plus the intent-routing core built on top of them:
//! classifier, context provider, personas, router, and interaction log.
//! It depends only on `switchboard-types` -- never on `switchboard-infra`
//! or any HTTP crate.

pub mod interaction;
pub mod llm;
pub mod routing;
pub mod speech;

#[cfg(test)]
pub(crate) mod testing;
