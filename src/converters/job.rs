//! Pure job and attempt view builders.
//!
//! Nothing here performs I/O; builders that need log content live on
//! [`super::JobConverter`].

use super::config_extractor;
use super::enum_mapper::convert_to;
use super::failure::failure_summary_view;
use super::stats::{legacy_synced_counts, stream_stats, total_stats};
use crate::error::ViewError;
use crate::models::{Attempt, Job};
use crate::views::{
    AttemptInfoView, AttemptView, DestinationDefinitionSummary, JobDebugView, JobInfoLightView,
    JobInfoView, JobOptionalView, JobView, JobWithAttemptsView, PlatformVersion,
    SourceDefinitionSummary,
};

/// Build the read view of a job, without its attempts
pub fn build_job_view(job: &Job) -> Result<JobView, ViewError> {
    let extracted = config_extractor::extract(job);

    Ok(JobView {
        id: job.id,
        config_type: convert_to(job.config_type())?,
        config_id: job.scope.clone(),
        enabled_streams: extracted.enabled_streams,
        reset_config: extracted.reset_config,
        refresh_config: extracted.refresh_config,
        created_at: job.created_at_in_second,
        updated_at: job.updated_at_in_second,
        started_at: job.started_at_in_second,
        status: convert_to(job.status)?,
    })
}

pub fn build_attempt_view(attempt: &Attempt) -> Result<AttemptView, ViewError> {
    let total_stats = total_stats(attempt);
    let (bytes_synced, records_synced) = legacy_synced_counts(total_stats.as_ref());

    Ok(AttemptView {
        id: i64::from(attempt.attempt_number),
        status: convert_to(attempt.status)?,
        bytes_synced,
        records_synced,
        total_stats,
        stream_stats: stream_stats(attempt),
        created_at: attempt.created_at_in_second,
        updated_at: attempt.updated_at_in_second,
        ended_at: attempt.ended_at_in_second,
        failure_summary: failure_summary_view(
            attempt.failure_summary.as_ref(),
            attempt.updated_at_in_second,
        )?,
    })
}

/// Attempt info without contacting the log store
pub fn build_attempt_info_without_logs(attempt: &Attempt) -> Result<AttemptInfoView, ViewError> {
    Ok(AttemptInfoView {
        attempt: build_attempt_view(attempt)?,
        logs: None,
    })
}

/// Attempts of `job` ordered by attempt number; ties keep their stored order
pub fn sorted_attempts(job: &Job) -> Vec<&Attempt> {
    let mut attempts: Vec<&Attempt> = job.attempts.iter().collect();
    attempts.sort_by_key(|attempt| attempt.attempt_number);
    attempts
}

pub fn build_job_with_attempts(job: &Job) -> Result<JobWithAttemptsView, ViewError> {
    let attempts = sorted_attempts(job)
        .into_iter()
        .map(build_attempt_view)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(JobWithAttemptsView {
        job: build_job_view(job)?,
        attempts,
    })
}

/// Full job info shape with every attempt's logs left out
pub fn build_job_info_without_logs(job: &Job) -> Result<JobInfoView, ViewError> {
    let attempts = sorted_attempts(job)
        .into_iter()
        .map(build_attempt_info_without_logs)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(JobInfoView {
        job: build_job_view(job)?,
        attempts,
    })
}

pub fn build_job_info_light(job: &Job) -> Result<JobInfoLightView, ViewError> {
    Ok(JobInfoLightView {
        job: build_job_view(job)?,
    })
}

/// View for a lookup that may not have found a job
pub fn build_job_optional(job: Option<&Job>) -> Result<JobOptionalView, ViewError> {
    Ok(JobOptionalView {
        job: job.map(build_job_view).transpose()?,
    })
}

/// Flatten job identity with externally supplied connector definitions and version
pub fn build_debug_job_view(
    job_info: &JobInfoView,
    source_definition: SourceDefinitionSummary,
    destination_definition: DestinationDefinitionSummary,
    platform_version: &PlatformVersion,
) -> JobDebugView {
    JobDebugView {
        id: job_info.job.id,
        config_type: job_info.job.config_type,
        config_id: job_info.job.config_id.clone(),
        status: job_info.job.status,
        platform_version: platform_version.serialize(),
        source_definition,
        destination_definition,
    }
}
