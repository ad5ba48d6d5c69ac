//! # Log Store
//!
//! Collaborator interface for fetching attempt and synchronous-job log content.
//! Converters receive a [`LogStore`] at construction and never reach for a global.

pub mod file;

use std::{collections::BTreeSet, fmt, path::Path, path::PathBuf, str::FromStr};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::LogStoreError;

pub use file::FileLogStore;

/// Environment the workers that wrote the logs ran in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerEnvironment {
    Docker,
    Kubernetes,
}

impl WorkerEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerEnvironment::Docker => "docker",
            WorkerEnvironment::Kubernetes => "kubernetes",
        }
    }
}

impl fmt::Display for WorkerEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkerEnvironment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "docker" => Ok(WorkerEnvironment::Docker),
            "kubernetes" | "k8s" => Ok(WorkerEnvironment::Kubernetes),
            other => Err(other.to_string()),
        }
    }
}

/// Where logs are stored and how much of each file is returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfigs {
    pub root: PathBuf,
    pub tail_lines: usize,
}

/// Flags forwarded to the log store untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    enabled: BTreeSet<String>,
}

impl FeatureFlags {
    pub fn new<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: flags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_enabled(&self, flag: &str) -> bool {
        self.enabled.contains(flag)
    }
}

/// Everything a log store needs besides the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFetchContext {
    pub environment: WorkerEnvironment,
    pub log_configs: LogConfigs,
    pub feature_flags: FeatureFlags,
}

impl LogFetchContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            environment: config.worker_environment,
            log_configs: LogConfigs {
                root: config.log_root.clone(),
                tail_lines: config.log_tail_lines,
            },
            feature_flags: FeatureFlags::new(config.feature_flags.iter().cloned()),
        }
    }
}

/// Source of log lines for a log path
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Fetch the log lines stored at `path`, in file order
    async fn fetch_log_lines(
        &self,
        ctx: &LogFetchContext,
        path: &Path,
    ) -> Result<Vec<String>, LogStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_worker_environment() {
        assert_eq!(
            "Docker".parse::<WorkerEnvironment>(),
            Ok(WorkerEnvironment::Docker)
        );
        assert_eq!(
            "k8s".parse::<WorkerEnvironment>(),
            Ok(WorkerEnvironment::Kubernetes)
        );
        assert!("nomad".parse::<WorkerEnvironment>().is_err());
    }

    #[test]
    fn context_is_built_from_config() {
        let config = AppConfig {
            worker_environment: WorkerEnvironment::Kubernetes,
            log_root: PathBuf::from("/var/airbyte/logs"),
            log_tail_lines: 50,
            feature_flags: vec!["structured_logs".to_string()],
            ..AppConfig::default()
        };

        let ctx = LogFetchContext::from_config(&config);

        assert_eq!(ctx.environment, WorkerEnvironment::Kubernetes);
        assert_eq!(ctx.log_configs.root, PathBuf::from("/var/airbyte/logs"));
        assert_eq!(ctx.log_configs.tail_lines, 50);
        assert!(ctx.feature_flags.is_enabled("structured_logs"));
        assert!(!ctx.feature_flags.is_enabled("other"));
    }
}
