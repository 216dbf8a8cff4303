//! Interaction pipeline and its in-memory log.

pub mod log;
pub mod service;
