//! Configuration loading for the job view service.
//!
//! Loads layered `.env` files and environment variables prefixed with
//! `JOB_VIEWS_`, producing a typed [`AppConfig`].

use std::{collections::BTreeMap, env, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logs::WorkerEnvironment;
use crate::views::{InvalidPlatformVersion, PlatformVersion};

const ENV_PREFIX: &str = "JOB_VIEWS_";

/// Application configuration derived from `JOB_VIEWS_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    #[serde(default = "default_worker_environment")]
    pub worker_environment: WorkerEnvironment,
    /// Directory relative log paths are resolved against
    #[serde(default = "default_log_root")]
    pub log_root: PathBuf,
    /// Maximum number of trailing lines returned per log file
    #[serde(default = "default_log_tail_lines")]
    pub log_tail_lines: usize,
    /// Platform version reported in debug views
    #[serde(default = "default_platform_version")]
    pub platform_version: String,
    /// Feature flags forwarded to the log store
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_flags: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            worker_environment: default_worker_environment(),
            log_root: default_log_root(),
            log_tail_lines: default_log_tail_lines(),
            platform_version: default_platform_version(),
            feature_flags: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parsed platform version
    pub fn platform_version(&self) -> Result<PlatformVersion, ConfigError> {
        self.platform_version
            .parse()
            .map_err(|source| ConfigError::InvalidPlatformVersion { source })
    }

    /// Returns a pretty JSON representation for startup logging.
    pub fn redacted_json(&self) -> serde_json::Result<String> {
        // Nothing secret is configured today; keep the hook so callers never print raw config.
        serde_json::to_string_pretty(self)
    }

    /// Validates value ranges that parsing alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_tail_lines == 0 {
            return Err(ConfigError::InvalidLogTailLines {
                value: self.log_tail_lines,
            });
        }

        if !matches!(self.log_format.as_str(), "json" | "pretty") {
            return Err(ConfigError::InvalidLogFormat {
                value: self.log_format.clone(),
            });
        }

        self.platform_version()?;

        Ok(())
    }
}

fn default_profile() -> String {
    "local".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_worker_environment() -> WorkerEnvironment {
    WorkerEnvironment::Docker
}

fn default_log_root() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_log_tail_lines() -> usize {
    1_000_000
}

fn default_platform_version() -> String {
    "dev".to_string()
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load environment file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
    #[error("invalid worker environment '{value}'; expected 'docker' or 'kubernetes'")]
    InvalidWorkerEnvironment { value: String },
    #[error("log tail lines must be a positive integer, got '{value}'")]
    UnparsableLogTailLines { value: String },
    #[error("log tail lines must be at least 1, got {value}")]
    InvalidLogTailLines { value: usize },
    #[error("log format must be 'json' or 'pretty', got '{value}'")]
    InvalidLogFormat { value: String },
    #[error("{source}")]
    InvalidPlatformVersion { source: InvalidPlatformVersion },
}

/// Loads configuration using layered `.env` files and `JOB_VIEWS_*` env vars.
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new loader rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Creates a loader rooted at the provided directory (useful for tests).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Loads `.env`, `.env.local`, `.env.{profile}`, `.env.{profile}.local`, then
    /// the process environment, later layers winning.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let (mut layered, profile_hint) = self.collect_layered_env()?;

        // Overlay process environment last so it wins.
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                layered.insert(stripped.to_string(), value);
            }
        }

        let profile = layered
            .remove("PROFILE")
            .filter(|v| !v.is_empty())
            .unwrap_or(profile_hint);
        let log_level = layered
            .remove("LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_level);
        let log_format = layered
            .remove("LOG_FORMAT")
            .filter(|v| !v.is_empty())
            .map(|v| v.to_lowercase())
            .unwrap_or_else(default_log_format);

        let worker_environment = match layered
            .remove("WORKER_ENVIRONMENT")
            .filter(|v| !v.is_empty())
        {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidWorkerEnvironment { value })?,
            None => default_worker_environment(),
        };

        let log_root = layered
            .remove("LOG_ROOT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_log_root);

        let log_tail_lines = match layered.remove("LOG_TAIL_LINES").filter(|v| !v.is_empty()) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnparsableLogTailLines { value })?,
            None => default_log_tail_lines(),
        };

        let platform_version = layered
            .remove("PLATFORM_VERSION")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_platform_version);

        let feature_flags = layered
            .remove("FEATURE_FLAGS")
            .map(|flags| {
                flags
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let config = AppConfig {
            profile,
            log_level,
            log_format,
            worker_environment,
            log_root,
            log_tail_lines,
            platform_version,
            feature_flags,
        };

        config.validate()?;

        Ok(config)
    }

    fn collect_layered_env(&self) -> Result<(BTreeMap<String, String>, String), ConfigError> {
        let mut values = BTreeMap::new();

        self.merge_dotenv(self.base_dir.join(".env"), &mut values)?;
        self.merge_dotenv(self.base_dir.join(".env.local"), &mut values)?;

        let profile = env::var(format!("{}PROFILE", ENV_PREFIX))
            .ok()
            .or_else(|| values.get("PROFILE").cloned())
            .unwrap_or_else(default_profile);

        self.merge_dotenv(
            self.base_dir.join(format!(".env.{}", &profile)),
            &mut values,
        )?;
        self.merge_dotenv(
            self.base_dir.join(format!(".env.{}.local", &profile)),
            &mut values,
        )?;

        Ok((values, profile))
    }

    fn merge_dotenv(
        &self,
        path: PathBuf,
        values: &mut BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        match dotenvy::from_path_iter(&path) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                        path: path.clone(),
                        source,
                    })?;
                    if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                        values.insert(stripped.to_string(), value);
                    }
                }
                Ok(())
            }
            Err(dotenvy::Error::Io(ref io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(())
            }
            Err(err) => Err(ConfigError::EnvFile { path, source: err }),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
