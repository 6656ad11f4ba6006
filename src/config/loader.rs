//! Configuration loading and validation.
//!
//! # Responsibilities
//! - Read and deserialize the TOML configuration document
//! - Apply semantic validation (serde handles syntactic)
//! - Produce the immutable `VanityConfig` shared by every request
//!
//! # Design Decisions
//! - Fail closed: any invalid entry refuses startup, nothing is served
//! - Validation surfaces the first violation as one descriptive error
//! - A repo host that is merely unrecognized is not an error; the entry
//!   just serves without a go-source tag

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RawConfig;
use crate::routing::PathConfigSet;

/// Cache-Control max-age applied when the config does not set one.
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86_400;

/// Startup-fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cache_max_age must be non-negative, got {0}")]
    NegativeCacheMaxAge(i64),

    #[error("configuration for {path}: missing repo")]
    MissingRepo { path: String },

    #[error("configuration for {path}: repo is not a valid URL: {source}")]
    InvalidRepoUrl {
        path: String,
        source: url::ParseError,
    },

    #[error("configuration for {path}: unknown VCS {vcs}")]
    UnknownVcs { path: String, vcs: String },

    #[error("configuration for {path}: cannot infer VCS from {repo}")]
    CannotInferVcs { path: String, repo: String },

    #[error("config path {path} must begin with '/'")]
    MalformedPath { path: String },

    #[error("duplicate path after normalization: {path}")]
    DuplicatePath { path: String },
}

/// Fully validated, immutable server configuration.
#[derive(Debug)]
pub struct VanityConfig {
    pub host: Option<String>,
    pub cache_max_age: u64,
    pub paths: PathConfigSet,
}

impl VanityConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let cache_max_age = match raw.cache_max_age {
            Some(age) if age < 0 => return Err(ConfigError::NegativeCacheMaxAge(age)),
            Some(age) => age as u64,
            None => DEFAULT_CACHE_MAX_AGE,
        };
        let paths = PathConfigSet::from_config(&raw.paths)?;
        Ok(Self {
            host: raw.host,
            cache_max_age,
            paths,
        })
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<VanityConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    VanityConfig::from_toml(&content)
}
