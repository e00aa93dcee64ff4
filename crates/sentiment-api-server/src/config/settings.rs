use anyhow::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token value shipped in sample configs; treated the same as no token.
pub const PLACEHOLDER_TOKEN: &str = "your-huggingface-token-here";

/// Fallback env var for the provider credential.
pub const TOKEN_ENV_VAR: &str = "HUGGINGFACE_API_TOKEN";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    /// Display name reported by `/health`
    pub name: String,
    pub base_url: String,
    pub model: String,
    /// Short model description reported by `/`
    pub model_label: String,
    #[serde(default)]
    pub api_token: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    pub min_interval_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// "json" or "pretty"
    pub format: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        if settings.provider.token().is_none() {
            settings.provider.api_token = std::env::var(TOKEN_ENV_VAR).ok();
        }

        Ok(settings)
    }

    /// Builder seeded with the built-in defaults only
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("provider.name", "Hugging Face (FREE)")?
            .set_default("provider.base_url", "https://router.huggingface.co/hf-inference")?
            .set_default("provider.model", "cardiffnlp/twitter-roberta-base-sentiment-latest")?
            .set_default("provider.model_label", "Hugging Face RoBERTa")?
            .set_default("provider.timeout_seconds", 30)?
            .set_default("rate_limit.min_interval_ms", 1000)?
            .set_default("logging.format", "json")?;

        Ok(builder)
    }
}

impl ProviderConfig {
    /// Usable credential, if any. Blank and placeholder tokens count as absent.
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != PLACEHOLDER_TOKEN)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl RateLimitConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}
