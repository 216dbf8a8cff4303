use std::path::PathBuf;

use thiserror::Error;

/// Errors from text-to-speech providers.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("speech request failed: {0}")]
    Request(String),

    #[error("speech provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("speech request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },
}

/// Errors loading configuration from an explicitly requested file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
