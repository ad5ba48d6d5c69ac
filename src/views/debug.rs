//! Debug view of a job and the collaborator records it embeds

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{JobConfigType, JobStatus};

/// Source connector definition summary supplied by the definition lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceDefinitionSummary {
    pub source_definition_id: Uuid,
    #[schema(example = "Postgres")]
    pub name: String,
    #[schema(example = "airbyte/source-postgres")]
    pub docker_repository: String,
    #[schema(example = "3.6.2")]
    pub docker_image_tag: String,
    pub documentation_url: Option<String>,
}

/// Destination connector definition summary supplied by the definition lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DestinationDefinitionSummary {
    pub destination_definition_id: Uuid,
    #[schema(example = "BigQuery")]
    pub name: String,
    #[schema(example = "airbyte/destination-bigquery")]
    pub docker_repository: String,
    #[schema(example = "2.8.1")]
    pub docker_image_tag: String,
    pub documentation_url: Option<String>,
}

/// Flattened job identity plus the connector definitions and platform version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobDebugView {
    pub id: i64,
    pub config_type: JobConfigType,
    pub config_id: String,
    pub status: JobStatus,
    #[schema(example = "0.63.4")]
    pub platform_version: String,
    pub source_definition: SourceDefinitionSummary,
    pub destination_definition: DestinationDefinitionSummary,
}

const DEV_VERSION: &str = "dev";

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.\-]+))?$")
            .expect("platform version pattern is valid")
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid platform version '{0}': expected major.minor.patch[-suffix] or 'dev'")]
pub struct InvalidPlatformVersion(pub String);

/// Version of the platform serving the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformVersion {
    Dev,
    Release {
        major: u64,
        minor: u64,
        patch: u64,
        suffix: Option<String>,
    },
}

impl PlatformVersion {
    /// Canonical string form, stable across parse/serialize
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, PlatformVersion::Dev)
    }
}

impl FromStr for PlatformVersion {
    type Err = InvalidPlatformVersion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(DEV_VERSION) {
            return Ok(PlatformVersion::Dev);
        }

        let captures = version_pattern()
            .captures(trimmed)
            .ok_or_else(|| InvalidPlatformVersion(value.to_string()))?;
        let part = |index: usize| -> Result<u64, InvalidPlatformVersion> {
            captures[index]
                .parse()
                .map_err(|_| InvalidPlatformVersion(value.to_string()))
        };

        Ok(PlatformVersion::Release {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
            suffix: captures.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformVersion::Dev => f.write_str(DEV_VERSION),
            PlatformVersion::Release {
                major,
                minor,
                patch,
                suffix: None,
            } => write!(f, "{}.{}.{}", major, minor, patch),
            PlatformVersion::Release {
                major,
                minor,
                patch,
                suffix: Some(suffix),
            } => write!(f, "{}.{}.{}-{}", major, minor, patch, suffix),
        }
    }
}
