//! # Internal Records
//!
//! Stored representations of jobs, attempts and synchronous job runs. These are
//! read-only inputs to the converters in [`crate::converters`].

pub mod attempt;
pub mod catalog;
pub mod failure;
pub mod job;
pub mod synchronous;

pub use attempt::{
    Attempt, AttemptStatus, JobOutput, StandardSyncOutput, StandardSyncSummary, StreamSyncStats,
    SyncStats,
};
pub use catalog::{
    AirbyteStream, ConfiguredAirbyteCatalog, ConfiguredAirbyteStream, RefreshStream, RefreshType,
    ResetSourceConfiguration, StreamDescriptor,
};
pub use failure::{AttemptFailureSummary, FailureOrigin, FailureReason, FailureType};
pub use job::{
    ConfigType, ConnectorJobConfig, Job, JobConfig, JobStatus, RefreshConfig,
    ResetConnectionConfig, SyncJobConfig,
};
pub use synchronous::{SynchronousJobMetadata, SynchronousResponse};

/// Internal enumeration identified by a stable snake_case name.
///
/// External enumerations are matched against this name when converting.
pub trait NamedEnum: Copy + 'static {
    /// Type name reported in mapping errors
    const TYPE_NAME: &'static str;

    fn as_str(&self) -> &'static str;
}
