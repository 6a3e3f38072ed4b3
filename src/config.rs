//! Configuration module for the Backend API.
//!
//! Loads configuration from YAML files and environment variables.

use config::{
    builder::DefaultState, Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File,
};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Verbose logging with a human-readable formatter.
    #[serde(default)]
    pub debug: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines (ignored in debug mode).
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT` / `DEBUG` environment variables (`DEBUG` is on only for "true")
    /// 2. Environment variables (BACKEND__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml (if exists)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BACKEND")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option(
                "server.debug",
                std::env::var("DEBUG").ok().map(|v| v.eq_ignore_ascii_case("true")),
            )?
            .build()?;

        config.try_deserialize()
    }

    /// Builder seeded with the built-in defaults.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.debug", false)?
            .set_default("logging.json", true)
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { json: true }
    }
}
