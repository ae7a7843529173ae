//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (accept loop, hyper auto HTTP/1 + HTTP/2, Axum router)
//!     → body.rs (drain request body, stop at first error)
//!     → render (build the text dump)
//!     → 200 text/plain response
//! ```

pub mod body;
pub mod server;

pub use server::{AppState, HttpServer};
