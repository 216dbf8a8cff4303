//! Perplexity web-search answer engine.

pub mod client;
pub mod types;

pub use client::PerplexityProvider;
