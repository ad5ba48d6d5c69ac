//! Global tracing subscriber management.

use std::any::type_name_of_val;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt, layer::Layer, layer::SubscriberExt};

use crate::config::AppConfig;

/// Errors that can occur while initializing global telemetry.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

static TELEMETRY_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize global tracing/logging exactly once, wiring `log::` macros into the tracing pipeline.
///
/// Output goes to stderr so rendered views on stdout stay machine readable.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    if TELEMETRY_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Ok(());
    }

    // Install log bridge first so legacy `log::` macros route through tracing.
    if let Err(err) = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init()
    {
        // Another component may already have registered a LogTracer.
        let logger_type = type_name_of_val(log::logger());
        if !logger_type.contains("LogTracer") {
            eprintln!(
                "Warning: Failed to install log tracer bridge: {}. legacy `log::` macros will not emit structured tracing events.",
                err
            );
        }
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = match config.log_format.as_str() {
        "pretty" => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
        _ => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };

    // The log bridge is installed above; set the subscriber directly so it is not
    // installed twice.
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        TELEMETRY_INITIALIZED.store(false, Ordering::SeqCst);
        return Err(err.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_install_clears_flag_and_later_calls_are_no_ops() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            log_format: "pretty".to_string(),
            ..AppConfig::default()
        };

        // Guarantee a global subscriber exists so the install below must fail.
        let _ = tracing::subscriber::set_global_default(
            tracing::subscriber::NoSubscriber::default(),
        );
        TELEMETRY_INITIALIZED.store(false, Ordering::SeqCst);

        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, TelemetryInitError::Subscriber(_)));
        assert!(!TELEMETRY_INITIALIZED.load(Ordering::SeqCst));

        TELEMETRY_INITIALIZED.store(true, Ordering::SeqCst);
        assert!(init_tracing(&config).is_ok());
    }
}
