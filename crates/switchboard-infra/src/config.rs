//! Configuration and credential loading.
//!
//! Settings come from an optional `switchboard.toml`; API keys come only
//! from the environment. A missing config file means defaults, and a
//! malformed one logs a warning and also yields defaults.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use switchboard_types::config::AppConfig;
use switchboard_types::error::ConfigError;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "switchboard.toml";

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const PERPLEXITY_API_KEY: &str = "PERPLEXITY_API_KEY";
pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";

/// Read and parse a config file, reporting why it could not be used.
pub async fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    toml::from_str::<AppConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Load configuration from `path`, or `./switchboard.toml` when `None`.
pub async fn load_config(path: Option<&Path>) -> AppConfig {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    match read_config(&config_path).await {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}

/// Provider API keys. Blank values count as absent.
#[derive(Default)]
pub struct ProviderCredentials {
    pub llm: Option<SecretString>,
    pub search: Option<SecretString>,
    pub speech: Option<SecretString>,
}

impl ProviderCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve keys through `lookup` (an environment accessor).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(SecretString::from)
        };
        Self {
            llm: secret(GEMINI_API_KEY),
            search: secret(PERPLEXITY_API_KEY),
            speech: secret(ELEVENLABS_API_KEY),
        }
    }
}

// Does not print key material.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("llm", &self.llm.is_some())
            .field("search", &self.search.is_some())
            .field("speech", &self.speech.is_some())
            .finish()
    }
}
