//! Request body draining.
//!
//! The body is read forward-only until the stream ends. A read error (peer
//! reset, malformed chunking) ends the read early; whatever arrived before it
//! is kept and rendered.

use axum::body::{Body, Bytes};
use futures_util::StreamExt;

/// Read `body` to the end, or up to the first error.
pub async fn drain(body: Body) -> Bytes {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(data) => buf.extend_from_slice(&data),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    bytes_read = buf.len(),
                    "Request body ended early"
                );
                break;
            }
        }
    }

    Bytes::from(buf)
}
