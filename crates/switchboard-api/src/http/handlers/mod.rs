//! Route handlers.

pub mod chat;
pub mod health;
pub mod logs;
pub mod voice;
