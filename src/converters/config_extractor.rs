//! Type-specific extraction from a job's configuration union

use crate::models::{self, ConfiguredAirbyteCatalog, Job, JobConfig};
use crate::views::{JobRefreshConfig, ResetConfig, StreamDescriptor};

/// Configuration-derived parts of a job view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedConfig {
    pub reset_config: Option<ResetConfig>,
    pub refresh_config: Option<JobRefreshConfig>,
    pub enabled_streams: Vec<StreamDescriptor>,
}

fn to_view_descriptor(descriptor: &models::StreamDescriptor) -> StreamDescriptor {
    StreamDescriptor {
        name: descriptor.name.clone(),
        namespace: descriptor.namespace.clone(),
    }
}

pub fn extract(job: &Job) -> ExtractedConfig {
    ExtractedConfig {
        reset_config: reset_config(job),
        refresh_config: refresh_config(job),
        enabled_streams: enabled_streams(job),
    }
}

/// Streams of the configured catalog; empty when the job has no catalog
pub fn enabled_streams(job: &Job) -> Vec<StreamDescriptor> {
    job.config
        .configured_catalog()
        .map(|catalog: &ConfiguredAirbyteCatalog| {
            catalog
                .streams
                .iter()
                .map(|configured| to_view_descriptor(&configured.descriptor()))
                .collect()
        })
        .unwrap_or_default()
}

/// Streams to reset, for reset-connection jobs that carry a reset configuration
pub fn reset_config(job: &Job) -> Option<ResetConfig> {
    match &job.config {
        JobConfig::ResetConnection(config) => {
            config
                .reset_source_configuration
                .as_ref()
                .map(|reset| ResetConfig {
                    streams_to_reset: reset.streams_to_reset.iter().map(to_view_descriptor).collect(),
                })
        }
        _ => None,
    }
}

/// Streams to refresh, for refresh jobs with at least one described stream
pub fn refresh_config(job: &Job) -> Option<JobRefreshConfig> {
    let JobConfig::Refresh(config) = &job.config else {
        return None;
    };

    let streams_to_refresh: Vec<StreamDescriptor> = config
        .streams_to_refresh
        .iter()
        .filter_map(|stream| stream.stream_descriptor.as_ref())
        .map(to_view_descriptor)
        .collect();

    if streams_to_refresh.is_empty() {
        None
    } else {
        Some(JobRefreshConfig { streams_to_refresh })
    }
}

/// Streams a refresh, clear or reset job operates on; `None` for other job types
pub fn streams_associated_with_job(job: &Job) -> Option<Vec<models::StreamDescriptor>> {
    match &job.config {
        JobConfig::Refresh(config) => Some(
            config
                .streams_to_refresh
                .iter()
                .filter_map(|stream| stream.stream_descriptor.clone())
                .collect(),
        ),
        JobConfig::Clear(config) | JobConfig::ResetConnection(config) => Some(
            config
                .reset_source_configuration
                .as_ref()
                .map(|reset| reset.streams_to_reset.clone())
                .unwrap_or_default(),
        ),
        JobConfig::CheckConnectionSource(_)
        | JobConfig::CheckConnectionDestination(_)
        | JobConfig::DiscoverSchema(_)
        | JobConfig::GetSpec(_)
        | JobConfig::Sync(_) => None,
    }
}
