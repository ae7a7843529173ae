//! HTTP request echo server library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;

pub use config::schema::EchoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::Renderer;
