//! Telemetry configuration.

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Service name reported in the startup log record.
    pub service_name: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable output.
    pub json: bool,
}
