//! Sema Configuration Management
//!
//! Handles configuration from environment variables and TOML config files
//! with sensible defaults for development.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Disambiguation engine configuration
    pub wsd: WsdConfig,

    /// Text processing configuration
    pub pipeline: PipelineConfig,

    /// Taxonomy backend configuration
    pub taxonomy: TaxonomyConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(radius) = std::env::var("SEMA_WINDOW_RADIUS") {
            config.wsd.window_radius =
                radius.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SEMA_WINDOW_RADIUS".to_string(),
                    value: radius,
                })?;
        }
        if let Ok(parallel) = std::env::var("SEMA_PARALLEL") {
            config.wsd.parallel =
                parallel.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SEMA_PARALLEL".to_string(),
                    value: parallel,
                })?;
        }

        if let Ok(len) = std::env::var("SEMA_MIN_TOKEN_LEN") {
            config.pipeline.min_token_len =
                len.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SEMA_MIN_TOKEN_LEN".to_string(),
                    value: len,
                })?;
        }
        if let Ok(keep) = std::env::var("SEMA_KEEP_STOPWORDS") {
            config.pipeline.keep_stopwords =
                keep.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SEMA_KEEP_STOPWORDS".to_string(),
                    value: keep,
                })?;
        }

        if let Ok(path) = std::env::var("SEMA_TAXONOMY_PATH") {
            config.taxonomy.path = PathBuf::from(path);
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let env_config = Self::from_env()?;

        if env_config.wsd.window_radius != WsdConfig::default().window_radius {
            self.wsd.window_radius = env_config.wsd.window_radius;
        }
        if env_config.wsd.parallel != WsdConfig::default().parallel {
            self.wsd.parallel = env_config.wsd.parallel;
        }
        if env_config.pipeline.min_token_len != PipelineConfig::default().min_token_len {
            self.pipeline.min_token_len = env_config.pipeline.min_token_len;
        }
        if env_config.pipeline.keep_stopwords != PipelineConfig::default().keep_stopwords {
            self.pipeline.keep_stopwords = env_config.pipeline.keep_stopwords;
        }
        if env_config.taxonomy.path != TaxonomyConfig::default().path {
            self.taxonomy.path = env_config.taxonomy.path;
        }
        if env_config.logging.level != LoggingConfig::default().level {
            self.logging.level = env_config.logging.level;
        }

        Ok(self)
    }
}

/// Disambiguation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsdConfig {
    /// Context window radius in terms on each side of the target
    pub window_radius: usize,

    /// Disambiguate terms on a rayon thread pool
    pub parallel: bool,
}

impl Default for WsdConfig {
    fn default() -> Self {
        Self {
            window_radius: 5,
            parallel: false,
        }
    }
}

/// Text processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum token length kept by the tokenizer
    pub min_token_len: usize,

    /// Keep stopwords instead of filtering them
    pub keep_stopwords: bool,

    /// Lowercase tokens during normalization
    pub lowercase: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            keep_stopwords: false,
            lowercase: true,
        }
    }
}

/// Taxonomy backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Path to the taxonomy JSON file
    pub path: PathBuf,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/taxonomy.json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
