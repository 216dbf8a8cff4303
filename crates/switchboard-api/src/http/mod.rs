//! HTTP layer: `/chat`, `/voice`, `/logs`, `/health`.

pub mod error;
pub mod handlers;
pub mod router;
