//! Metadata of jobs run synchronously, outside the job/attempt records
//! (connection checks, schema discovery, spec retrieval).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::failure::FailureReason;
use super::job::ConfigType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynchronousJobMetadata {
    pub id: Uuid,
    pub config_type: ConfigType,
    pub config_id: Uuid,
    /// Seconds since epoch
    pub created_at: i64,
    /// Seconds since epoch
    pub ended_at: i64,
    pub succeeded: bool,
    #[serde(default)]
    pub connector_configuration_updated: bool,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub failure_reason: Option<FailureReason>,
}

/// Result of a synchronous job: its typed output plus run metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynchronousResponse<T> {
    #[serde(default = "Option::default")]
    pub output: Option<T>,
    pub metadata: SynchronousJobMetadata,
}

impl<T> SynchronousResponse<T> {
    pub fn is_success(&self) -> bool {
        self.metadata.succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_requires_config_id() {
        let mut record = json!({
            "id": "0b7e5c1a-93f4-4f8e-bb1d-2c6a9d3e4f50",
            "config_type": "discover_schema",
            "created_at": 10,
            "ended_at": 12,
            "succeeded": true
        });
        assert!(serde_json::from_value::<SynchronousJobMetadata>(record.clone()).is_err());

        record["config_id"] = json!("5e3b2a1c-8d7f-4e6a-9b0c-1d2e3f4a5b6c");
        let metadata: SynchronousJobMetadata = serde_json::from_value(record).unwrap();
        assert_eq!(
            metadata.config_id.to_string(),
            "5e3b2a1c-8d7f-4e6a-9b0c-1d2e3f4a5b6c"
        );
        assert!(!metadata.connector_configuration_updated);
        assert_eq!(metadata.log_path, None);
    }
}
