//! Shared fixtures for integration tests.
//!
//! Builds stored job records and an in-memory log store so tests can drive
//! the converters without touching real storage.

#![allow(dead_code)]

use async_trait::async_trait;
use job_views::LogStoreError;
use job_views::logs::{FeatureFlags, LogConfigs, LogFetchContext, LogStore, WorkerEnvironment};
use job_views::models::{
    AirbyteStream, Attempt, AttemptStatus, ConfiguredAirbyteCatalog, ConfiguredAirbyteStream,
    Job, JobConfig, JobOutput, JobStatus, StandardSyncOutput, StandardSyncSummary,
    StreamSyncStats, SyncJobConfig, SyncStats,
};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Connection id used as the scope of fixture jobs
pub const CONNECTION_ID: &str = "6f1c7a8e-2d4b-4c1e-9a3f-5b7d9e0f1a2b";

/// Log store backed by a map of path to lines, recording every requested path.
#[derive(Default)]
pub struct MemoryLogStore {
    files: HashMap<PathBuf, Vec<String>>,
    requested: Mutex<Vec<PathBuf>>,
}

impl MemoryLogStore {
    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            lines.iter().map(|line| line.to_string()).collect(),
        );
        self
    }

    pub fn requested(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn fetch_log_lines(
        &self,
        _ctx: &LogFetchContext,
        path: &Path,
    ) -> Result<Vec<String>, LogStoreError> {
        self.requested.lock().unwrap().push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| {
            LogStoreError::io(path, io::Error::new(io::ErrorKind::NotFound, "log not found"))
        })
    }
}

/// Log fetch context rooted at `root`, keeping at most `tail_lines` lines per file.
pub fn log_context(root: &Path, tail_lines: usize) -> LogFetchContext {
    LogFetchContext {
        environment: WorkerEnvironment::Docker,
        log_configs: LogConfigs {
            root: root.to_path_buf(),
            tail_lines,
        },
        feature_flags: FeatureFlags::default(),
    }
}

pub fn catalog(streams: &[(&str, Option<&str>)]) -> ConfiguredAirbyteCatalog {
    ConfiguredAirbyteCatalog {
        streams: streams
            .iter()
            .map(|(name, namespace)| ConfiguredAirbyteStream {
                stream: AirbyteStream {
                    name: name.to_string(),
                    namespace: namespace.map(str::to_string),
                    json_schema: serde_json::json!({ "type": "object" }),
                },
                sync_mode: None,
                destination_sync_mode: None,
            })
            .collect(),
    }
}

pub fn attempt(number: i32, status: AttemptStatus) -> Attempt {
    Attempt {
        attempt_number: number,
        job_id: 42,
        status,
        output: None,
        failure_summary: None,
        log_path: None,
        created_at_in_second: 1_700_000_000 + i64::from(number) * 60,
        updated_at_in_second: 1_700_000_030 + i64::from(number) * 60,
        ended_at_in_second: None,
    }
}

/// Attempt whose sync output reports the given totals and one stream's stats.
pub fn attempt_with_stats(number: i32, bytes: u64, records: u64) -> Attempt {
    let stats = SyncStats {
        bytes_emitted: Some(bytes),
        records_emitted: Some(records),
        source_state_messages_emitted: Some(1),
        records_committed: Some(records),
    };

    Attempt {
        output: Some(JobOutput {
            sync: Some(StandardSyncOutput {
                standard_sync_summary: Some(StandardSyncSummary {
                    bytes_synced: Some(bytes),
                    records_synced: Some(records),
                    total_stats: Some(stats),
                    stream_stats: Some(vec![StreamSyncStats {
                        stream_name: "users".to_string(),
                        stream_namespace: Some("public".to_string()),
                        stats,
                    }]),
                }),
            }),
        }),
        ended_at_in_second: Some(1_700_000_500),
        ..attempt(number, AttemptStatus::Succeeded)
    }
}

pub fn sync_job(status: JobStatus, attempts: Vec<Attempt>) -> Job {
    Job {
        id: 42,
        scope: CONNECTION_ID.to_string(),
        config: JobConfig::Sync(SyncJobConfig {
            configured_airbyte_catalog: Some(catalog(&[
                ("users", Some("public")),
                ("orders", None),
            ])),
        }),
        status,
        created_at_in_second: 1_700_000_000,
        updated_at_in_second: 1_700_000_600,
        started_at_in_second: Some(1_700_000_001),
        attempts,
    }
}
