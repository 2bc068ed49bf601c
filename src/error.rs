//! Startup and serve failures surfaced from `main`.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
