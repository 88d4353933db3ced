use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::summarize::{API_KEY_ENV, SummarizeConfig};
use crate::youtube::ResolverConfig;

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Summarization credential; the PERPLEXITY_API_KEY environment variable
    /// takes priority over this.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_retries: u32,
    pub retry_delay_secs: u64,
    pub max_input_chars: usize,
    pub preferred_langs: Vec<String>,
    pub cache_ttl_secs: u64,
    pub cache_capacity: usize,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        let summarize = SummarizeConfig::default();
        let resolver = ResolverConfig::default();
        Config {
            api_key: None,
            api_url: summarize.api_url,
            model: summarize.model,
            max_retries: summarize.max_retries,
            retry_delay_secs: summarize.retry_delay.as_secs(),
            max_input_chars: summarize.max_input_chars,
            preferred_langs: resolver.preferred_langs,
            cache_ttl_secs: 24 * 60 * 60,
            cache_capacity: 64,
            temperature: summarize.temperature,
            max_tokens: summarize.max_tokens,
        }
    }
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            preferred_langs: self.preferred_langs.clone(),
        }
    }

    /// Derive the client config, resolving the credential from the
    /// environment first, then the config file.
    pub fn summarize_config(&self) -> SummarizeConfig {
        SummarizeConfig {
            api_key: std::env::var(API_KEY_ENV).ok().or_else(|| self.api_key.clone()),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            max_retries: self.max_retries,
            retry_delay: Duration::from_secs(self.retry_delay_secs),
            max_input_chars: self.max_input_chars,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
model = "sonar"
max_retries = 5
retry_delay_secs = 1
max_input_chars = 20000
preferred_langs = ["en", "ja"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "sonar");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.max_input_chars, 20_000);
        assert_eq!(config.preferred_langs, vec!["en", "ja"]);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model, "sonar-pro");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_secs, 2);
        assert_eq!(config.max_input_chars, 15_000);
        assert_eq!(config.preferred_langs, vec!["ja", "en"]);
        assert_eq!(config.cache_ttl_secs, 24 * 60 * 60);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"api_key = "pplx-test""#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("pplx-test"));
        assert_eq!(config.model, "sonar-pro");
    }

    #[test]
    fn test_summarize_config_derivation() {
        let config: Config = toml::from_str(r#"retry_delay_secs = 7"#).unwrap();
        let derived = config.summarize_config();
        assert_eq!(derived.retry_delay, Duration::from_secs(7));
        assert_eq!(derived.model, "sonar-pro");
    }
}
