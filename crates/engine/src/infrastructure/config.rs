//! Engine configuration
//!
//! Loaded once at startup from environment variables. The provider API key
//! is deliberately absent: the client reads it at call time.

use std::time::Duration;

/// Default provider base URL (`/v1/chat/completions` is appended).
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default chat-completion model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Environment variable holding the provider bearer credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TEMPERATURE: f32 = 0.9;
const DEFAULT_MAX_TOKENS: u32 = 1200;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Engine configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub generation: GenerationSettings,
    /// CORS allowed origins (comma-separated, or "*" for any); `None` disables CORS
    pub cors_allowed_origins: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Chat-completion provider connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the variable read for the bearer credential on every call
    pub api_key_var: String,
    /// Finite bound on a single provider call
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            api_key_var: OPENAI_API_KEY_VAR.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fixed generation parameters, independent of the creative inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "SERVER_PORT",
                value: raw,
                reason: "must be a valid port number",
            })?,
            None => 3000,
        };

        let timeout_secs = match var("LLM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "LLM_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be a positive number of seconds",
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let temperature = match var("LLM_TEMPERATURE") {
            Some(raw) => match raw.parse::<f32>() {
                Ok(t) if (0.0..=2.0).contains(&t) => t,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "LLM_TEMPERATURE",
                        value: raw,
                        reason: "must be a number between 0.0 and 2.0",
                    })
                }
            },
            None => DEFAULT_TEMPERATURE,
        };

        let max_tokens = match var("LLM_MAX_TOKENS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "LLM_MAX_TOKENS",
                        value: raw,
                        reason: "must be a positive integer",
                    })
                }
            },
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port,
            },
            provider: ProviderConfig {
                base_url: var("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                api_key_var: OPENAI_API_KEY_VAR.to_string(),
                timeout: Duration::from_secs(timeout_secs),
            },
            generation: GenerationSettings {
                temperature,
                max_tokens,
            },
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}
