use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ScoringWeights;
use crate::engine::EngineConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct EngineSettings {
    pub category_bonus: f64,
    pub style_bonus: f64,
    pub occasion_bonus: f64,
    pub color_bonus: f64,
    pub popularity_divisor: f64,
    pub max_cards: usize,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub max_cards: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            engine: EngineSettings {
                category_bonus: weights.category_bonus,
                style_bonus: weights.style_bonus,
                occasion_bonus: weights.occasion_bonus,
                color_bonus: weights.color_bonus,
                popularity_divisor: weights.popularity_divisor,
                max_cards: 4,
            },
            server: ServerConfig { bind_address: "127.0.0.1".to_string(), port: 8084 },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl EngineSettings {
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            weights: ScoringWeights {
                category_bonus: self.category_bonus,
                style_bonus: self.style_bonus,
                occasion_bonus: self.occasion_bonus,
                color_bonus: self.color_bonus,
                popularity_divisor: self.popularity_divisor,
            },
            max_cards: self.max_cards,
        }
    }
}

impl AppConfig {
    /// Defaults, then optional `atuendo.toml` patch, then `ATUENDO_*` env
    /// overrides, then programmatic overrides, then validation.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("atuendo.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(engine) = patch.engine {
            if let Some(category_bonus) = engine.category_bonus {
                self.engine.category_bonus = category_bonus;
            }
            if let Some(style_bonus) = engine.style_bonus {
                self.engine.style_bonus = style_bonus;
            }
            if let Some(occasion_bonus) = engine.occasion_bonus {
                self.engine.occasion_bonus = occasion_bonus;
            }
            if let Some(color_bonus) = engine.color_bonus {
                self.engine.color_bonus = color_bonus;
            }
            if let Some(popularity_divisor) = engine.popularity_divisor {
                self.engine.popularity_divisor = popularity_divisor;
            }
            if let Some(max_cards) = engine.max_cards {
                self.engine.max_cards = max_cards;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("ATUENDO_ENGINE_MAX_CARDS") {
            self.engine.max_cards = parse_usize("ATUENDO_ENGINE_MAX_CARDS", &value)?;
        }
        if let Some(value) = read_env("ATUENDO_ENGINE_POPULARITY_DIVISOR") {
            self.engine.popularity_divisor =
                parse_f64("ATUENDO_ENGINE_POPULARITY_DIVISOR", &value)?;
        }

        if let Some(value) = read_env("ATUENDO_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("ATUENDO_SERVER_PORT") {
            self.server.port = parse_u16("ATUENDO_SERVER_PORT", &value)?;
        }

        let log_level = read_env("ATUENDO_LOGGING_LEVEL").or_else(|| read_env("ATUENDO_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("ATUENDO_LOGGING_FORMAT").or_else(|| read_env("ATUENDO_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(max_cards) = overrides.max_cards {
            self.engine.max_cards = max_cards;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_engine(&self.engine)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("atuendo.toml"), PathBuf::from("config/atuendo.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn validate_engine(engine: &EngineSettings) -> Result<(), ConfigError> {
    if engine.max_cards == 0 || engine.max_cards > 12 {
        return Err(ConfigError::Validation(
            "engine.max_cards must be in range 1..=12".to_string(),
        ));
    }

    if engine.popularity_divisor <= 0.0 {
        return Err(ConfigError::Validation(
            "engine.popularity_divisor must be positive".to_string(),
        ));
    }

    let bonuses = [
        ("engine.category_bonus", engine.category_bonus),
        ("engine.style_bonus", engine.style_bonus),
        ("engine.occasion_bonus", engine.occasion_bonus),
        ("engine.color_bonus", engine.color_bonus),
    ];
    for (name, value) in bonuses {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{name} must be a non-negative finite number"
            )));
        }
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation("server.bind_address must not be empty".to_string()));
    }
    if server.port == 0 {
        return Err(ConfigError::Validation(
            "server.port must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    engine: Option<EnginePatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct EnginePatch {
    category_bonus: Option<f64>,
    style_bonus: Option<f64>,
    occasion_bonus: Option<f64>,
    color_bonus: Option<f64>,
    popularity_divisor: Option<f64>,
    max_cards: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
