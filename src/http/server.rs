//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dump handler
//! - Accept TCP connections and serve HTTP/1.1 and HTTP/2 on each
//! - Log transport failures per connection
//! - Stop accepting on shutdown and drain in-flight connections

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto,
    service::TowerToHyperService,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::EchoConfig;
use crate::http::body;
use crate::net::{ConnectionGuard, ConnectionTracker};
use crate::render::Renderer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Renderer,
}

/// HTTP server that answers every request with a dump of itself.
pub struct HttpServer {
    router: Router,
    config: EchoConfig,
    connections: ConnectionTracker,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let state = AppState {
            renderer: Renderer::new(config.profile),
        };
        let router = Self::build_router(state);
        Self {
            router,
            config,
            connections: ConnectionTracker::new(),
        }
    }

    /// Build the Axum router. Every path and method reaches the dump handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dump_handler))
            .route("/", any(dump_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for serving in-process without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Serve connections from `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            profile = ?self.config.profile,
            "HTTP server starting"
        );

        loop {
            let (stream, peer_addr) = tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to accept connection");
                        continue;
                    }
                },
                _ = shutdown.recv() => break,
            };

            let guard = self.connections.track();
            tracing::debug!(
                connection_id = %guard.id(),
                peer_addr = %peer_addr,
                "Connection accepted"
            );
            tokio::spawn(serve_connection(
                stream,
                peer_addr,
                self.router.clone(),
                guard,
            ));
        }

        drop(listener);
        let grace = Duration::from_secs(self.config.listener.shutdown_grace_secs);
        if !self.connections.drain_within(grace).await {
            tracing::warn!(
                remaining = self.connections.active_count(),
                "Shutdown grace period elapsed with connections still open"
            );
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Serve one connection. Failures are logged and the connection is dropped.
async fn serve_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    router: Router,
    guard: ConnectionGuard,
) {
    let service = TowerToHyperService::new(router);
    let builder = auto::Builder::new(TokioExecutor::new());

    if let Err(e) = builder
        .serve_connection(TokioIo::new(stream), service)
        .await
    {
        let what = connection_error_kind(&*e);
        tracing::warn!(
            connection_id = %guard.id(),
            peer_addr = %peer_addr,
            error = %e,
            "{what}"
        );
    }
}

/// Describe a connection failure: a broken write, or anything else
/// (malformed request head, client gone mid-body).
fn connection_error_kind(err: &(dyn std::error::Error + 'static)) -> &'static str {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::WriteZero
            ) {
                return "Failed to write response";
            }
        }
        current = e.source();
    }
    "Connection error"
}

/// Render the request and send it back as plain text.
async fn dump_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> impl IntoResponse {
    let (parts, body) = request.into_parts();

    tracing::debug!(
        method = %parts.method,
        uri = %parts.uri,
        "Rendering request dump"
    );

    let body = body::drain(body).await;
    let dump = state.renderer.render(&Request::from_parts(parts, body));

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        dump,
    )
}
