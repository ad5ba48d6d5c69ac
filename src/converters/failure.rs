//! Failure reason mapping with timestamp fallback

use super::enum_mapper::convert_optional;
use crate::error::ViewError;
use crate::models::{AttemptFailureSummary, FailureReason};
use crate::views::{AttemptFailureSummaryView, FailureReasonView};

const MILLIS_PER_SECOND: i64 = 1000;

/// Map one failure reason. A reason without its own timestamp takes
/// `fallback_seconds` converted to milliseconds.
pub fn failure_reason_view(
    reason: Option<&FailureReason>,
    fallback_seconds: i64,
) -> Result<Option<FailureReasonView>, ViewError> {
    let Some(reason) = reason else {
        return Ok(None);
    };

    Ok(Some(FailureReasonView {
        failure_origin: convert_optional(reason.failure_origin)?,
        failure_type: convert_optional(reason.failure_type)?,
        external_message: reason.external_message.clone(),
        internal_message: reason.internal_message.clone(),
        stacktrace: reason.stacktrace.clone(),
        timestamp: reason
            .timestamp
            .unwrap_or(fallback_seconds.saturating_mul(MILLIS_PER_SECOND)),
        retryable: reason.retryable,
    }))
}

/// Map a failure summary, preserving failure order and the partial-success flag
pub fn failure_summary_view(
    summary: Option<&AttemptFailureSummary>,
    fallback_seconds: i64,
) -> Result<Option<AttemptFailureSummaryView>, ViewError> {
    let Some(summary) = summary else {
        return Ok(None);
    };

    let failures = summary
        .failures
        .iter()
        .filter_map(|reason| failure_reason_view(Some(reason), fallback_seconds).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(AttemptFailureSummaryView {
        failures,
        partial_success: summary.partial_success,
    }))
}
