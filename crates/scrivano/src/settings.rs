//! Runtime settings.
//!
//! Settings load from bundled defaults merged with an optional
//! `scrivano.toml` in the working directory; user values take precedence.

use config::{Config, File, FileFormat};
use scrivano_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Bundled default settings.
const DEFAULT_SETTINGS: &str = r#"
export_dir = "documents"

[follow_up]
model = "gemini-2.5-flash"
temperature = 0.7

[retry]
no_retry = false
"#;

/// Follow-up generation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FollowUpSettings {
    /// Model for the follow-up call
    pub model: String,
    /// Temperature for the follow-up call
    pub temperature: f32,
}

/// Backend retry settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrySettings {
    /// Disable automatic retry
    #[serde(default)]
    pub no_retry: bool,
    /// Override maximum retry attempts
    #[serde(default)]
    pub max_retries: Option<usize>,
    /// Override initial backoff delay in milliseconds
    #[serde(default)]
    pub backoff_ms: Option<u64>,
}

/// Top-level settings for the CLI and TUI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Default export directory for generated documents
    pub export_dir: String,
    /// Follow-up generation settings
    pub follow_up: FollowUpSettings,
    /// Backend retry settings
    pub retry: RetrySettings,
}

impl Settings {
    /// Load settings from defaults plus an optional `scrivano.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(File::with_name("scrivano").required(false))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_deserialize() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.export_dir, "documents");
        assert_eq!(settings.follow_up.model, "gemini-2.5-flash");
        assert!(!settings.retry.no_retry);
        assert!(settings.retry.max_retries.is_none());
    }
}
