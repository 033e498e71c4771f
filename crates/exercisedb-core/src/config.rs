//! Client configuration.
//!
//! Holds the RapidAPI key, the API host and the directory used for the
//! on-disk reference cache. Configuration is normally read from the
//! environment (see [`ExerciseConfig::from_env`]); binaries are expected to
//! load a `.env` file first if they want one.

use std::path::{Path, PathBuf};

use crate::error::{ExerciseDbError, Result};

/// Environment variable holding the RapidAPI key
pub const API_KEY_VAR: &str = "EXERCISE_DB_API_KEY";

/// Environment variable overriding the API host
pub const API_HOST_VAR: &str = "EXERCISE_DB_API_HOST";

/// Environment variable overriding the reference cache directory
pub const CACHE_DIR_VAR: &str = "CACHE_DIR";

/// Environment variable overriding the request base URL
pub const BASE_URL_VAR: &str = "EXERCISE_DB_BASE_URL";

pub const DEFAULT_HOST: &str = "exercisedb.p.rapidapi.com";

pub const DEFAULT_CACHE_DIR: &str = "data/cached_references";

#[derive(Clone, PartialEq, Eq)]
pub struct ExerciseConfig {
    pub api_key: String,
    pub host: String,
    pub cache_dir: PathBuf,
    /// Sent requests go here instead of `https://{host}` when set.
    /// The `x-rapidapi-host` header still carries `host`.
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ExerciseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("cache_dir", &self.cache_dir)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ExerciseConfig {
    /// Config with the given key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            base_url: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl AsRef<Path>) -> Self {
        self.cache_dir = cache_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or_else(|| {
            ExerciseDbError::Configuration(format!("{} not found in environment", API_KEY_VAR))
        })?;

        let mut config = Self::new(api_key);
        if let Some(host) = get(API_HOST_VAR) {
            config.host = host;
        }
        if let Some(dir) = get(CACHE_DIR_VAR) {
            config.cache_dir = PathBuf::from(dir);
        }
        config.base_url = get(BASE_URL_VAR);

        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable. Called once when a client is built.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ExerciseDbError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(ExerciseDbError::Configuration(
                "API host must not be empty".to_string(),
            ));
        }
        if let Some(ref url) = self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ExerciseDbError::Configuration(format!(
                    "Base URL must start with http:// or https://: {}",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Root URL every endpoint path is appended to
    pub fn base_url(&self) -> String {
        match self.base_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.host),
        }
    }

    /// File a reference list is mirrored to when caching is on
    pub fn cache_path(&self, list_type: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", list_type))
    }
}
