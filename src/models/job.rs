//! Job record
//!
//! A job is one execution of a configured sync, reset, refresh, clear or
//! connector operation, together with the attempts made to run it.

use serde::{Deserialize, Serialize};

use super::NamedEnum;
use super::attempt::Attempt;
use super::catalog::{ConfiguredAirbyteCatalog, RefreshStream, ResetSourceConfiguration};

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Incomplete,
    Failed,
    Succeeded,
    Cancelled,
}

impl JobStatus {
    pub const ALL: &'static [JobStatus] = &[
        JobStatus::Pending,
        JobStatus::Running,
        JobStatus::Incomplete,
        JobStatus::Failed,
        JobStatus::Succeeded,
        JobStatus::Cancelled,
    ];
}

impl NamedEnum for JobStatus {
    const TYPE_NAME: &'static str = "JobStatus";

    fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Incomplete => "incomplete",
            JobStatus::Failed => "failed",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

/// Discriminator of [`JobConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    CheckConnectionSource,
    CheckConnectionDestination,
    DiscoverSchema,
    GetSpec,
    Sync,
    ResetConnection,
    Refresh,
    Clear,
}

impl ConfigType {
    pub const ALL: &'static [ConfigType] = &[
        ConfigType::CheckConnectionSource,
        ConfigType::CheckConnectionDestination,
        ConfigType::DiscoverSchema,
        ConfigType::GetSpec,
        ConfigType::Sync,
        ConfigType::ResetConnection,
        ConfigType::Refresh,
        ConfigType::Clear,
    ];
}

impl NamedEnum for ConfigType {
    const TYPE_NAME: &'static str = "ConfigType";

    fn as_str(&self) -> &'static str {
        match self {
            ConfigType::CheckConnectionSource => "check_connection_source",
            ConfigType::CheckConnectionDestination => "check_connection_destination",
            ConfigType::DiscoverSchema => "discover_schema",
            ConfigType::GetSpec => "get_spec",
            ConfigType::Sync => "sync",
            ConfigType::ResetConnection => "reset_connection",
            ConfigType::Refresh => "refresh",
            ConfigType::Clear => "clear",
        }
    }
}

/// Payload of connector-only jobs (check, discover, spec)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorJobConfig {
    pub docker_image: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncJobConfig {
    #[serde(default)]
    pub configured_airbyte_catalog: Option<ConfiguredAirbyteCatalog>,
}

/// Payload shared by reset-connection and clear jobs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetConnectionConfig {
    #[serde(default)]
    pub configured_airbyte_catalog: Option<ConfiguredAirbyteCatalog>,
    #[serde(default)]
    pub reset_source_configuration: Option<ResetSourceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default)]
    pub configured_airbyte_catalog: Option<ConfiguredAirbyteCatalog>,
    #[serde(default)]
    pub streams_to_refresh: Vec<RefreshStream>,
}

/// Type-specific job configuration, tagged by `config_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "config_type", rename_all = "snake_case")]
pub enum JobConfig {
    CheckConnectionSource(ConnectorJobConfig),
    CheckConnectionDestination(ConnectorJobConfig),
    DiscoverSchema(ConnectorJobConfig),
    GetSpec(ConnectorJobConfig),
    Sync(SyncJobConfig),
    ResetConnection(ResetConnectionConfig),
    Refresh(RefreshConfig),
    Clear(ResetConnectionConfig),
}

impl JobConfig {
    pub fn config_type(&self) -> ConfigType {
        match self {
            JobConfig::CheckConnectionSource(_) => ConfigType::CheckConnectionSource,
            JobConfig::CheckConnectionDestination(_) => ConfigType::CheckConnectionDestination,
            JobConfig::DiscoverSchema(_) => ConfigType::DiscoverSchema,
            JobConfig::GetSpec(_) => ConfigType::GetSpec,
            JobConfig::Sync(_) => ConfigType::Sync,
            JobConfig::ResetConnection(_) => ConfigType::ResetConnection,
            JobConfig::Refresh(_) => ConfigType::Refresh,
            JobConfig::Clear(_) => ConfigType::Clear,
        }
    }

    /// Configured catalog of the job, if this kind of job carries one
    pub fn configured_catalog(&self) -> Option<&ConfiguredAirbyteCatalog> {
        match self {
            JobConfig::Sync(config) => config.configured_airbyte_catalog.as_ref(),
            JobConfig::ResetConnection(config) | JobConfig::Clear(config) => {
                config.configured_airbyte_catalog.as_ref()
            }
            JobConfig::Refresh(config) => config.configured_airbyte_catalog.as_ref(),
            JobConfig::CheckConnectionSource(_)
            | JobConfig::CheckConnectionDestination(_)
            | JobConfig::DiscoverSchema(_)
            | JobConfig::GetSpec(_) => None,
        }
    }
}

/// Stored job record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    /// Identifier of the configuration this job runs for (usually a connection id)
    pub scope: String,
    pub config: JobConfig,
    pub status: JobStatus,
    pub created_at_in_second: i64,
    pub updated_at_in_second: i64,
    #[serde(default)]
    pub started_at_in_second: Option<i64>,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl Job {
    pub fn config_type(&self) -> ConfigType {
        self.config.config_type()
    }
}
