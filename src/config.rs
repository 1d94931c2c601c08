//! Configuration management for Guardpost server
//!
//! Sources, lowest precedence first: `config/default.toml`,
//! `config/{RUN_MODE}.toml`, `GUARDPOST_*` environment variables, then
//! `JWT_SECRET`. Every key has a built-in default.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-this-secret-in-production".to_string(),
            jwt_expiration_hours: 12,
        }
    }
}

/// Log output style
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for this crate, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Fixture seeding for the in-memory store
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FixturesConfig {
    /// Seed the sample requests, reports, sites and staff at startup
    pub enabled: bool,
    /// Password given to every seeded staff account
    pub seed_password: String,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed_password: "guardpost".to_string(),
        }
    }
}

/// Limits on report drafts held in memory
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DraftsConfig {
    /// Open drafts per staff member; opening one more evicts that member's oldest
    pub max_per_staff: usize,
    /// Drafts older than this are discarded
    pub ttl_minutes: i64,
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            max_per_staff: 5,
            ttl_minutes: 8 * 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub fixtures: FixturesConfig,
    pub drafts: DraftsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // GUARDPOST_SERVER__PORT=9000, GUARDPOST_FIXTURES__ENABLED=false
            .add_source(
                Environment::with_prefix("GUARDPOST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?;

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
