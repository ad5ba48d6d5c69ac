//! Catalog and stream descriptor records
//!
//! Stream-level pieces of a stored job configuration: the configured catalog a
//! sync runs against, and the stream selections carried by reset and refresh jobs.

use serde::{Deserialize, Serialize};

/// Identifies a single stream by name and optional namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl StreamDescriptor {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Stream as declared by the source connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirbyteStream {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// JSON schema of the records emitted on this stream
    #[serde(default)]
    pub json_schema: serde_json::Value,
}

/// A stream selected for replication, with its sync settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredAirbyteStream {
    pub stream: AirbyteStream,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_sync_mode: Option<String>,
}

impl ConfiguredAirbyteStream {
    /// Descriptor of the underlying stream
    pub fn descriptor(&self) -> StreamDescriptor {
        StreamDescriptor {
            name: self.stream.name.clone(),
            namespace: self.stream.namespace.clone(),
        }
    }
}

/// The set of streams a job was configured to move
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfiguredAirbyteCatalog {
    #[serde(default)]
    pub streams: Vec<ConfiguredAirbyteStream>,
}

/// Streams whose destination data should be wiped by a reset or clear
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetSourceConfiguration {
    #[serde(default)]
    pub streams_to_reset: Vec<StreamDescriptor>,
}

/// How a refreshed stream treats data already in the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshType {
    Truncate,
    Merge,
}

/// One entry of a refresh job's stream list. Older records may omit the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshStream {
    #[serde(default)]
    pub stream_descriptor: Option<StreamDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_type: Option<RefreshType>,
}

impl RefreshStream {
    pub fn new(stream_descriptor: Option<StreamDescriptor>) -> Self {
        Self {
            stream_descriptor,
            refresh_type: None,
        }
    }
}
