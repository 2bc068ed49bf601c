mod config;
mod error;
mod routes;

use crate::config::SiteConfig;
use crate::error::SiteError;

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env();
    let motion = config::motion_from_env();
    let leptos_options = leptos::prelude::get_configuration(None)
        .map_err(|e| SiteError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options, motion);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
