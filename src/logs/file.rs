//! Filesystem-backed log store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{LogFetchContext, LogStore};
use crate::error::LogStoreError;

/// Reads log files from local (or mounted) storage, returning the tail of each file
#[derive(Debug, Clone, Default)]
pub struct FileLogStore;

impl FileLogStore {
    pub fn new() -> Self {
        Self
    }

    fn resolve(ctx: &LogFetchContext, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            ctx.log_configs.root.join(path)
        }
    }
}

/// Last `limit` lines of `contents`, in file order
fn tail_lines(contents: &str, limit: usize) -> Vec<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let start = lines.len().saturating_sub(limit);
    lines[start..].iter().map(|line| line.to_string()).collect()
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn fetch_log_lines(
        &self,
        ctx: &LogFetchContext,
        path: &Path,
    ) -> Result<Vec<String>, LogStoreError> {
        let resolved = Self::resolve(ctx, path);
        debug!(
            environment = %ctx.environment,
            path = %resolved.display(),
            "Reading log file"
        );

        let bytes = tokio::fs::read(&resolved)
            .await
            .map_err(|source| LogStoreError::io(&resolved, source))?;
        // Connector output is not guaranteed to be UTF-8.
        let contents = String::from_utf8_lossy(&bytes);

        Ok(tail_lines(&contents, ctx.log_configs.tail_lines))
    }
}
