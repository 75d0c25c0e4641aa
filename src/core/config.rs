//! Application configuration management
//!
//! This module handles loading configuration from an optional TOML file and
//! reading the provider credential from the environment. All values are
//! resolved once at startup and passed around as an immutable `Config`.

use crate::core::constants::env;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default server port
const DEFAULT_PORT: u16 = 8501;

/// Default configuration file looked up when `CONFIG_PATH` is unset
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Default OpenAI API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RequestConfig {
    /// Request timeout in seconds; the HTTP client's default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub openai: OpenAIConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential; `None` when `OPENAI_API_KEY` is unset or blank
    pub api_key: Option<String>,

    /// Chat-completions API base URL
    pub base_url: String,

    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Optional request timeout in seconds
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Build a configuration from parsed TOML and a credential
    pub fn from_parts(toml: TomlConfig, api_key: Option<String>) -> Self {
        Config {
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            base_url: toml.openai.base_url.trim_end_matches('/').to_string(),
            host: toml.server.host,
            port: toml.server.port,
            log_level: toml.server.log_level,
            request_timeout: toml.request.timeout_secs,
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the TOML file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P, api_key: Option<String>) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let toml_config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Self::from_parts(toml_config, api_key))
    }

    /// Load configuration from environment and config file
    ///
    /// Reads `.env` if present, then `CONFIG_PATH` (or `config.toml` in the
    /// current directory). A missing default file falls back to built-in
    /// defaults; a missing file named explicitly by `CONFIG_PATH` is an error.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var(env::API_KEY).ok();
        let config_path = std::env::var(env::CONFIG_PATH).ok();

        Self::load(config_path.as_deref(), Path::new(DEFAULT_CONFIG_FILE), api_key)
    }

    /// Pick the configuration source
    ///
    /// An explicit `config_path` must be readable. Without one, `default_path`
    /// is used when it exists and built-in defaults otherwise.
    pub fn load(
        config_path: Option<&str>,
        default_path: &Path,
        api_key: Option<String>,
    ) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path, api_key)
                .with_context(|| format!("Failed to load configuration from {path}")),
            None if default_path.exists() => Self::from_file(default_path, api_key),
            None => Ok(Self::from_parts(TomlConfig::default(), api_key)),
        }
    }

    /// Whether a provider credential is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
