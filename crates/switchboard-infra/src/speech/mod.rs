//! Text-to-speech providers.

pub mod elevenlabs;

pub use elevenlabs::ElevenLabsSynthesizer;
