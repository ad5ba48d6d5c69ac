//! # Error Handling
//!
//! Errors raised while building views. Missing optional data is never an error;
//! only enum version skew and log retrieval failures are.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the external log store
#[derive(Debug, Error)]
pub enum LogStoreError {
    #[error("failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LogStoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogStoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that abort a view-construction call
#[derive(Debug, Error)]
pub enum ViewError {
    /// An internal enum value has no external counterpart
    #[error("{enum_name} value '{value}' has no external counterpart")]
    UnmappedEnum {
        enum_name: &'static str,
        value: &'static str,
    },
    /// The log store could not supply log content
    #[error("failed to fetch logs from {path}")]
    LogFetch {
        path: PathBuf,
        #[source]
        source: LogStoreError,
    },
}

impl ViewError {
    /// Whether retrying the same call could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ViewError::LogFetch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn unmapped_enum_message_names_type_and_value() {
        let error = ViewError::UnmappedEnum {
            enum_name: "AttemptStatus",
            value: "not_started",
        };

        assert_eq!(
            error.to_string(),
            "AttemptStatus value 'not_started' has no external counterpart"
        );
        assert!(!error.is_retryable());
    }

    #[test]
    fn log_fetch_error_keeps_source_chain() {
        let error = ViewError::LogFetch {
            path: PathBuf::from("jobs/1/0/logs.log"),
            source: LogStoreError::io(
                "/var/logs/jobs/1/0/logs.log",
                io::Error::new(io::ErrorKind::NotFound, "missing"),
            ),
        };

        assert!(error.is_retryable());
        assert!(error.to_string().contains("jobs/1/0/logs.log"));

        let source = error.source().expect("log store error is the source");
        assert!(source.to_string().contains("/var/logs/jobs/1/0/logs.log"));
        assert!(source.source().is_some());
    }
}
