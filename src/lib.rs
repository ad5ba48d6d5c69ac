//! # Job Views Library
//!
//! Converts stored job and attempt records of a data-synchronization platform
//! into normalized read views: job-type specific configuration, aggregated
//! attempt statistics, failure summaries and attempt log content.

pub mod config;
pub mod converters;
pub mod error;
pub mod logs;
pub mod models;
pub mod telemetry;
pub mod views;

pub use converters::JobConverter;
pub use error::{LogStoreError, ViewError};
