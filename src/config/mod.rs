//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read HTTP_ECHO_* variables)
//!     → schema.rs (typed values, defaults for anything unset)
//!     → EchoConfig (immutable, handed to the server at startup)
//! ```
//!
//! # Design Decisions
//! - No config file: the listen address is fixed, only the rendering
//!   profile and log format are selectable
//! - All fields have defaults so an empty environment is valid
//! - Invalid values are startup errors, never silently ignored

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_with, ConfigError};
pub use schema::{EchoConfig, ListenerConfig, LogFormat, ObservabilityConfig, Profile};
