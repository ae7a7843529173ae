//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → listener.rs (bind the fixed address, typed bind errors)
//! Each accepted TCP connection
//!     → connection.rs (connection ID, active-connection guard)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - No connection limit: the host HTTP stack schedules one task per connection
//! - Each connection tracked so shutdown can drain in-flight requests
//! - Plain TCP only

pub mod connection;
pub mod listener;

pub use connection::{ConnectionGuard, ConnectionId, ConnectionTracker};
pub use listener::{bind, ListenerError};
