//! Runtime configuration.
//!
//! Sources, later ones override earlier ones:
//! 1. `config.yaml` in the working directory (optional)
//! 2. the YAML file named by the `POS_CONFIG` environment variable
//! 3. environment variables prefixed `POS`, nested with `__`
//!    (`POS__SERVER__PORT=9000`, `POS__LOGGING__FILTER=debug`)
//!
//! Missing keys fall back to [`Config::default`].

use serde::Deserialize;

/// Environment variable naming an extra config file.
pub const CONFIG_ENV_VAR: &str = "POS_CONFIG";
/// Prefix for environment overrides.
pub const CONFIG_ENV_PREFIX: &str = "POS";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Request body limit; bounds profile picture uploads.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Request channel capacity of every actor. Must be at least 1.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub actors: ActorConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(std::env::var(CONFIG_ENV_VAR).ok().as_deref())
    }

    /// Like [`Config::load`], with an explicit extra file instead of `POS_CONFIG`.
    pub fn load_from(path: Option<&str>) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new("config", FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ::config::ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(::config::ConfigError::Message(
                "actors.buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
