//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → tower_http TraceLayer spans per request
//!
//! logging.rs installs the subscriber:
//!     → stdout, pretty or JSON
//! ```

pub mod logging;
