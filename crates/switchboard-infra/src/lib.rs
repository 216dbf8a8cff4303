//! Infrastructure layer for Switchboard.
//!
//! Concrete implementations of the provider traits defined in
//! `switchboard-core`: an OpenAI-compatible chat client (Gemini by default),
//! the Perplexity web-search client, ElevenLabs text-to-speech, plus the
//! configuration and credential loaders.

pub mod config;
pub mod llm;
pub mod speech;

#[cfg(test)]
pub(crate) mod test_server;
