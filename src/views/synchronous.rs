//! Read view of a synchronously executed job

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::attempt::{FailureReasonView, LogView};
use super::enums::JobConfigType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SynchronousJobView {
    pub id: Uuid,
    #[schema(example = "check_connection_source")]
    pub config_type: JobConfigType,
    /// Stringified configuration id
    pub config_id: String,
    /// Epoch seconds
    pub created_at: i64,
    /// Epoch seconds
    pub ended_at: i64,
    pub succeeded: bool,
    pub connector_configuration_updated: bool,
    pub logs: LogView,
    pub failure_reason: Option<FailureReasonView>,
}
