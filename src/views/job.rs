//! Job-level read views

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::attempt::{AttemptInfoView, AttemptView};
use super::enums::{JobConfigType, JobStatus};

/// Stream identity as exposed to API consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StreamDescriptor {
    #[schema(example = "users")]
    pub name: String,
    #[schema(example = "public")]
    pub namespace: Option<String>,
}

/// Streams targeted by a reset-connection job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResetConfig {
    pub streams_to_reset: Vec<StreamDescriptor>,
}

/// Streams targeted by a refresh job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobRefreshConfig {
    pub streams_to_refresh: Vec<StreamDescriptor>,
}

/// Read view of a single job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobView {
    /// Job identifier
    #[schema(example = 42)]
    pub id: i64,
    /// Kind of work the job performs
    #[schema(example = "sync")]
    pub config_type: JobConfigType,
    /// Identifier of the configuration (connection) the job belongs to
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub config_id: String,
    /// Streams enabled in the job's configured catalog; empty when there is no catalog
    pub enabled_streams: Vec<StreamDescriptor>,
    /// Present only for reset-connection jobs
    pub reset_config: Option<ResetConfig>,
    /// Present only for refresh jobs with at least one stream to refresh
    pub refresh_config: Option<JobRefreshConfig>,
    /// Creation time in epoch seconds
    #[schema(example = 1700000000)]
    pub created_at: i64,
    /// Last update time in epoch seconds
    #[schema(example = 1700000360)]
    pub updated_at: i64,
    /// Start time in epoch seconds, absent until the job starts
    #[schema(example = 1700000005)]
    pub started_at: Option<i64>,
    #[schema(example = "running")]
    pub status: JobStatus,
}

/// Job view with its attempts ordered by attempt number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobWithAttemptsView {
    pub job: JobView,
    pub attempts: Vec<AttemptView>,
}

/// Job view with attempts and their log content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobInfoView {
    pub job: JobView,
    pub attempts: Vec<AttemptInfoView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobInfoLightView {
    pub job: JobView,
}

/// Job view for lookups that may not find a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobOptionalView {
    pub job: Option<JobView>,
}
