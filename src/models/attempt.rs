//! Attempt record and the sync output it may carry

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::NamedEnum;
use super::failure::AttemptFailureSummary;

/// Status of a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// Created but not yet picked up. Not exposed externally.
    NotStarted,
    Running,
    Failed,
    Succeeded,
}

impl AttemptStatus {
    pub const ALL: &'static [AttemptStatus] = &[
        AttemptStatus::NotStarted,
        AttemptStatus::Running,
        AttemptStatus::Failed,
        AttemptStatus::Succeeded,
    ];
}

impl NamedEnum for AttemptStatus {
    const TYPE_NAME: &'static str = "AttemptStatus";

    fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::NotStarted => "not_started",
            AttemptStatus::Running => "running",
            AttemptStatus::Failed => "failed",
            AttemptStatus::Succeeded => "succeeded",
        }
    }
}

/// Counters reported by a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncStats {
    #[serde(default)]
    pub bytes_emitted: Option<u64>,
    #[serde(default)]
    pub records_emitted: Option<u64>,
    #[serde(default)]
    pub source_state_messages_emitted: Option<u64>,
    #[serde(default)]
    pub records_committed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSyncStats {
    pub stream_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_namespace: Option<String>,
    pub stats: SyncStats,
}

/// Summary written when a sync attempt finishes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardSyncSummary {
    /// Legacy counter, superseded by `total_stats`
    #[serde(default)]
    pub bytes_synced: Option<u64>,
    /// Legacy counter, superseded by `total_stats`
    #[serde(default)]
    pub records_synced: Option<u64>,
    #[serde(default)]
    pub total_stats: Option<SyncStats>,
    #[serde(default)]
    pub stream_stats: Option<Vec<StreamSyncStats>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardSyncOutput {
    #[serde(default)]
    pub standard_sync_summary: Option<StandardSyncSummary>,
}

/// Output of an attempt. Only sync-like jobs produce a sync output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobOutput {
    #[serde(default)]
    pub sync: Option<StandardSyncOutput>,
}

/// One attempt at running a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub attempt_number: i32,
    pub job_id: i64,
    pub status: AttemptStatus,
    #[serde(default)]
    pub output: Option<JobOutput>,
    #[serde(default)]
    pub failure_summary: Option<AttemptFailureSummary>,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    pub created_at_in_second: i64,
    pub updated_at_in_second: i64,
    #[serde(default)]
    pub ended_at_in_second: Option<i64>,
}

impl Attempt {
    /// Sync summary of this attempt, if every link of the output chain is present
    pub fn sync_summary(&self) -> Option<&StandardSyncSummary> {
        self.output
            .as_ref()
            .and_then(|output| output.sync.as_ref())
            .and_then(|sync| sync.standard_sync_summary.as_ref())
    }
}
