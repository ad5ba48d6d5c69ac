//! Failure records attached to attempts and synchronous jobs

use serde::{Deserialize, Serialize};

use super::NamedEnum;

/// Component a failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureOrigin {
    Source,
    Destination,
    Replication,
    Persistence,
    Normalization,
    Dbt,
    AirbytePlatform,
    Unknown,
}

impl FailureOrigin {
    pub const ALL: &'static [FailureOrigin] = &[
        FailureOrigin::Source,
        FailureOrigin::Destination,
        FailureOrigin::Replication,
        FailureOrigin::Persistence,
        FailureOrigin::Normalization,
        FailureOrigin::Dbt,
        FailureOrigin::AirbytePlatform,
        FailureOrigin::Unknown,
    ];
}

impl NamedEnum for FailureOrigin {
    const TYPE_NAME: &'static str = "FailureOrigin";

    fn as_str(&self) -> &'static str {
        match self {
            FailureOrigin::Source => "source",
            FailureOrigin::Destination => "destination",
            FailureOrigin::Replication => "replication",
            FailureOrigin::Persistence => "persistence",
            FailureOrigin::Normalization => "normalization",
            FailureOrigin::Dbt => "dbt",
            FailureOrigin::AirbytePlatform => "airbyte_platform",
            FailureOrigin::Unknown => "unknown",
        }
    }
}

/// Classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    ConfigError,
    SystemError,
    ManualCancellation,
    RefreshSchema,
    HeartbeatTimeout,
    DestinationTimeout,
    TransientError,
}

impl FailureType {
    pub const ALL: &'static [FailureType] = &[
        FailureType::ConfigError,
        FailureType::SystemError,
        FailureType::ManualCancellation,
        FailureType::RefreshSchema,
        FailureType::HeartbeatTimeout,
        FailureType::DestinationTimeout,
        FailureType::TransientError,
    ];
}

impl NamedEnum for FailureType {
    const TYPE_NAME: &'static str = "FailureType";

    fn as_str(&self) -> &'static str {
        match self {
            FailureType::ConfigError => "config_error",
            FailureType::SystemError => "system_error",
            FailureType::ManualCancellation => "manual_cancellation",
            FailureType::RefreshSchema => "refresh_schema",
            FailureType::HeartbeatTimeout => "heartbeat_timeout",
            FailureType::DestinationTimeout => "destination_timeout",
            FailureType::TransientError => "transient_error",
        }
    }
}

/// One cause of an attempt failure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FailureReason {
    #[serde(default)]
    pub failure_origin: Option<FailureOrigin>,
    #[serde(default)]
    pub failure_type: Option<FailureType>,
    #[serde(default)]
    pub external_message: Option<String>,
    #[serde(default)]
    pub internal_message: Option<String>,
    #[serde(default)]
    pub stacktrace: Option<String>,
    /// Millisecond epoch timestamp
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub retryable: Option<bool>,
}

/// All failures recorded for one attempt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttemptFailureSummary {
    #[serde(default)]
    pub failures: Vec<FailureReason>,
    #[serde(default)]
    pub partial_success: Option<bool>,
}
