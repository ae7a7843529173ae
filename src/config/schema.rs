//! Configuration schema definitions.
//!
//! All types derive Serde traits so the effective configuration can be
//! logged and compared in tests.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (bind address, shutdown grace).
    pub listener: ListenerConfig,

    /// Rendering profile for request dumps.
    pub profile: Profile,

    /// Log output settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. Fixed to port 8080 unless overridden in code.
    pub bind_address: String,

    /// Seconds to wait for in-flight connections after shutdown is triggered.
    pub shutdown_grace_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            shutdown_grace_secs: 5,
        }
    }
}

/// Which sections the renderer emits.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Section banners plus decoded authentication details.
    #[default]
    Verbose,
    /// No banners, no authentication section.
    Minimal,
}

impl Profile {
    pub fn is_verbose(self) -> bool {
        matches!(self, Profile::Verbose)
    }
}

impl FromStr for Profile {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(Profile::Verbose),
            "minimal" => Ok(Profile::Minimal),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log line format.
    pub log_format: LogFormat,
}

/// Output format of the `tracing` fmt layer.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

impl FromStr for LogFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// A string that names none of an enum's variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value `{0}`")]
pub struct UnknownVariant(pub String);
