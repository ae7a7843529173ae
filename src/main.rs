//! HTTP request echo server.
//!
//! Answers every request on port 8080 with a plain-text dump of the request:
//! method and URL, headers, decoded `Authorization` credentials, cookies and
//! the raw body.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌─────────┐    ┌─────────┐    ┌──────────┐
//!     ──────────────────▶│   net   │───▶│  http   │───▶│  render  │
//!                        │listener │    │ server  │    │ headers  │
//!                        └─────────┘    └─────────┘    │ auth     │
//!                                                      │ cookies  │
//!     text/plain dump    ┌─────────┐                   │ body     │
//!     ◀──────────────────│  http   │◀──────────────────└──────────┘
//!                        └─────────┘
//!
//!     Cross-cutting: config (env), observability (tracing), lifecycle (signals)
//! ```
//!
//! # Environment
//! - `HTTP_ECHO_PROFILE`: `verbose` (default) or `minimal`
//! - `HTTP_ECHO_LOG_FORMAT`: `pretty` (default) or `json`
//! - `RUST_LOG`: tracing filter directives

use http_echo::config;
use http_echo::http::HttpServer;
use http_echo::lifecycle::{shutdown_on_signal, Shutdown};
use http_echo::net;
use http_echo::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("http-echo: {e}");
            return Err(e.into());
        }
    };

    logging::init(config.observability.log_format);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        profile = ?config.profile,
        "http-echo starting"
    );

    let listener = match net::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
