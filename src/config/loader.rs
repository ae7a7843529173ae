//! Configuration loading from the process environment.

use crate::config::schema::{EchoConfig, LogFormat, Profile, UnknownVariant};

/// Selects the rendering profile (`verbose` or `minimal`).
pub const PROFILE_VAR: &str = "HTTP_ECHO_PROFILE";

/// Selects the log format (`pretty` or `json`).
pub const LOG_FORMAT_VAR: &str = "HTTP_ECHO_LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HTTP_ECHO_PROFILE: {0}")]
    Profile(#[source] UnknownVariant),
    #[error("invalid HTTP_ECHO_LOG_FORMAT: {0}")]
    LogFormat(#[source] UnknownVariant),
}

/// Load configuration from environment variables.
pub fn load_config() -> Result<EchoConfig, ConfigError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to resolve variables.
///
/// Unset or empty variables keep the schema default.
pub fn load_config_with<F>(lookup: F) -> Result<EchoConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EchoConfig::default();

    if let Some(value) = lookup(PROFILE_VAR).filter(|v| !v.trim().is_empty()) {
        config.profile = value.parse::<Profile>().map_err(ConfigError::Profile)?;
    }

    if let Some(value) = lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
        config.observability.log_format =
            value.parse::<LogFormat>().map_err(ConfigError::LogFormat)?;
    }

    Ok(config)
}
