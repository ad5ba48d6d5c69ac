//! Attempt-level read views

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{AttemptStatus, FailureOrigin, FailureType};

/// Flattened sync counters of an attempt or stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttemptStats {
    #[schema(example = 1048576)]
    pub bytes_emitted: Option<u64>,
    #[schema(example = 1200)]
    pub records_emitted: Option<u64>,
    #[schema(example = 3)]
    pub state_messages_emitted: Option<u64>,
    #[schema(example = 1200)]
    pub records_committed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptStreamStats {
    #[schema(example = "users")]
    pub stream_name: String,
    pub stream_namespace: Option<String>,
    pub stats: AttemptStats,
}

/// One failure cause, with its timestamp always resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FailureReasonView {
    pub failure_origin: Option<FailureOrigin>,
    pub failure_type: Option<FailureType>,
    pub external_message: Option<String>,
    pub internal_message: Option<String>,
    pub stacktrace: Option<String>,
    /// Millisecond epoch timestamp
    #[schema(example = 1700000360000_i64)]
    pub timestamp: i64,
    pub retryable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptFailureSummaryView {
    pub failures: Vec<FailureReasonView>,
    pub partial_success: Option<bool>,
}

/// Read view of a single attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptView {
    /// Attempt number within the job
    #[schema(example = 0)]
    pub id: i64,
    #[schema(example = "succeeded")]
    pub status: AttemptStatus,
    /// Deprecated: same value as `total_stats.bytes_emitted`
    pub bytes_synced: Option<u64>,
    /// Deprecated: same value as `total_stats.records_emitted`
    pub records_synced: Option<u64>,
    pub total_stats: Option<AttemptStats>,
    pub stream_stats: Option<Vec<AttemptStreamStats>>,
    /// Creation time in epoch seconds
    pub created_at: i64,
    /// Last update time in epoch seconds
    pub updated_at: i64,
    /// End time in epoch seconds, absent while the attempt runs
    pub ended_at: Option<i64>,
    pub failure_summary: Option<AttemptFailureSummaryView>,
}

/// Log content fetched from the log store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct LogView {
    pub log_lines: Vec<String>,
}

/// Attempt view, optionally with its log content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptInfoView {
    pub attempt: AttemptView,
    pub logs: Option<LogView>,
}
