//! # Job View Conversion
//!
//! Turns stored job, attempt and synchronous-job records into read views.
//!
//! Pure builders are free functions re-exported from [`job`]. Builders that
//! attach log content go through [`JobConverter`], which owns the log store
//! handle and the context passed to it on every fetch. A failed fetch fails the
//! whole call; no partial view is returned.

pub mod config_extractor;
pub mod enum_mapper;
pub mod failure;
pub mod job;
pub mod stats;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tracing::{debug, instrument};

use crate::error::ViewError;
use crate::logs::{LogFetchContext, LogStore};
use crate::models::{Attempt, Job, SynchronousJobMetadata, SynchronousResponse};
use crate::views::{AttemptInfoView, JobInfoView, LogView, SynchronousJobView};

pub use config_extractor::{ExtractedConfig, streams_associated_with_job};
pub use enum_mapper::{convert_optional, convert_to};
pub use job::{
    build_attempt_info_without_logs, build_attempt_view, build_debug_job_view,
    build_job_info_light, build_job_info_without_logs, build_job_optional, build_job_view,
    build_job_with_attempts, sorted_attempts,
};

/// View builder holding the log store collaborator
#[derive(Clone)]
pub struct JobConverter {
    log_store: Arc<dyn LogStore>,
    log_context: LogFetchContext,
}

impl JobConverter {
    pub fn new(log_store: Arc<dyn LogStore>, log_context: LogFetchContext) -> Self {
        Self {
            log_store,
            log_context,
        }
    }

    pub fn log_context(&self) -> &LogFetchContext {
        &self.log_context
    }

    /// Log content stored at `path`. A record without a log path has no logs to show.
    pub async fn build_log_view(&self, path: Option<&Path>) -> Result<LogView, ViewError> {
        match path {
            Some(path) => self.fetch_logs(path).await,
            None => Ok(LogView::default()),
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    async fn fetch_logs(&self, path: &Path) -> Result<LogView, ViewError> {
        let started = Instant::now();
        counter!("job_views_log_fetch_total").increment(1);

        let result = self
            .log_store
            .fetch_log_lines(&self.log_context, path)
            .await;
        histogram!("job_views_log_fetch_seconds").record(started.elapsed().as_secs_f64());

        match result {
            Ok(log_lines) => {
                debug!(lines = log_lines.len(), "Fetched log lines");
                Ok(LogView { log_lines })
            }
            Err(source) => {
                counter!("job_views_log_fetch_failures_total").increment(1);
                Err(ViewError::LogFetch {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Attempt view with the attempt's log content
    #[instrument(skip_all, fields(job_id = attempt.job_id, attempt_number = attempt.attempt_number))]
    pub async fn build_attempt_info(&self, attempt: &Attempt) -> Result<AttemptInfoView, ViewError> {
        let view = build_attempt_view(attempt)?;
        let logs = self.build_log_view(attempt.log_path.as_deref()).await?;

        Ok(AttemptInfoView {
            attempt: view,
            logs: Some(logs),
        })
    }

    /// Job view with every attempt, ordered by attempt number, and their logs
    #[instrument(skip_all, fields(job_id = job.id, attempts = job.attempts.len()))]
    pub async fn build_full_job_info(&self, job: &Job) -> Result<JobInfoView, ViewError> {
        let job_view = build_job_view(job)?;

        let mut attempts = Vec::with_capacity(job.attempts.len());
        for attempt in sorted_attempts(job) {
            attempts.push(self.build_attempt_info(attempt).await?);
        }

        debug!("Built full job info");
        Ok(JobInfoView {
            job: job_view,
            attempts,
        })
    }

    /// View of a synchronously executed job. Failures without a timestamp take
    /// the job's end time.
    #[instrument(skip_all, fields(job_id = %metadata.id))]
    pub async fn build_synchronous_job_view(
        &self,
        metadata: &SynchronousJobMetadata,
    ) -> Result<SynchronousJobView, ViewError> {
        let config_type = convert_to(metadata.config_type)?;
        let failure_reason =
            failure::failure_reason_view(metadata.failure_reason.as_ref(), metadata.ended_at)?;
        let logs = self.build_log_view(metadata.log_path.as_deref()).await?;

        Ok(SynchronousJobView {
            id: metadata.id,
            config_type,
            config_id: metadata.config_id.to_string(),
            created_at: metadata.created_at,
            ended_at: metadata.ended_at,
            succeeded: metadata.succeeded,
            connector_configuration_updated: metadata.connector_configuration_updated,
            logs,
            failure_reason,
        })
    }

    pub async fn build_synchronous_job_view_from_response<T>(
        &self,
        response: &SynchronousResponse<T>,
    ) -> Result<SynchronousJobView, ViewError> {
        self.build_synchronous_job_view(&response.metadata).await
    }
}
