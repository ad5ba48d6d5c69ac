//! # Read Views
//!
//! Immutable, externally consumable representations of jobs and attempts.
//! Absent optionals serialize as `null` so consumers can tell "no data" from zero.

pub mod attempt;
pub mod debug;
pub mod enums;
pub mod job;
pub mod synchronous;

pub use attempt::{
    AttemptFailureSummaryView, AttemptInfoView, AttemptStats, AttemptStreamStats, AttemptView,
    FailureReasonView, LogView,
};
pub use debug::{
    DestinationDefinitionSummary, InvalidPlatformVersion, JobDebugView, PlatformVersion,
    SourceDefinitionSummary,
};
pub use enums::{AttemptStatus, FailureOrigin, FailureType, JobConfigType, JobStatus};
pub use job::{
    JobInfoLightView, JobInfoView, JobOptionalView, JobRefreshConfig, JobView,
    JobWithAttemptsView, ResetConfig, StreamDescriptor,
};
pub use synchronous::SynchronousJobView;
