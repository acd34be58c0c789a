//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uiwalk_llm::{ChatClient, Provider};

/// CLI configuration, read from `~/.uiwalk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend provider name ("deepseek" or "openai")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Backend credential; the provider's environment variable wins over it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default review mode ("standard" or "competitive")
    #[serde(default = "default_review_mode")]
    pub review_mode: String,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".uiwalk").join("config.toml"))
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// The configured backend provider.
    pub fn provider(&self) -> Result<Provider> {
        Provider::parse(&self.provider)
            .ok_or_else(|| CliError::Config(format!("Unknown provider '{}'", self.provider)))
    }

    /// The configured default review mode.
    pub fn review_mode(&self) -> Result<uiwalk_domain::ReviewMode> {
        match self.review_mode.trim().to_lowercase().as_str() {
            "standard" => Ok(uiwalk_domain::ReviewMode::Standard),
            "competitive" => Ok(uiwalk_domain::ReviewMode::Competitive),
            other => Err(CliError::Config(format!("Unknown review mode '{}'", other))),
        }
    }

    /// Build a chat client, or `None` when running without a backend.
    ///
    /// `--offline` suppresses the client entirely; otherwise the provider's
    /// environment variable is tried first, then the configured key. Absence
    /// of both is not an error, the pipeline degrades to its deterministic
    /// fallbacks.
    pub fn chat_client(&self, offline: bool) -> Result<Option<ChatClient>> {
        if offline {
            return Ok(None);
        }

        let provider = self.provider()?;
        if let Some(client) = ChatClient::from_env(provider) {
            return Ok(Some(client));
        }

        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {
                let client = ChatClient::new(provider, key.clone())
                    .map_err(|e| CliError::Config(e.to_string()))?;
                Ok(Some(client))
            }
            _ => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            review_mode: default_review_mode(),
        }
    }
}

fn default_provider() -> String {
    "deepseek".to_string()
}

fn default_review_mode() -> String {
    "standard".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiwalk_domain::ReviewMode;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider().unwrap(), Provider::Deepseek);
        assert_eq!(config.review_mode().unwrap(), ReviewMode::Standard);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
            provider = "openai"
            review_mode = "competitive"
            "#,
        )
        .unwrap();
        assert_eq!(config.provider().unwrap(), Provider::Openai);
        assert_eq!(config.review_mode().unwrap(), ReviewMode::Competitive);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config = Config {
            provider: "anthropic".to_string(),
            ..Config::default()
        };
        assert!(config.provider().is_err());
    }

    #[test]
    fn test_offline_suppresses_client() {
        let config = Config {
            api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        assert!(config.chat_client(true).unwrap().is_none());
    }
}
