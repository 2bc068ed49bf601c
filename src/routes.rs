//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered portfolio page, the WASM/CSS
//! bundle under `/pkg`, and a liveness probe. The page itself carries the
//! engine configuration in a `<meta>` tag so hydration picks up the same
//! settings the server rendered with.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use motion::config::MotionConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-page routes.
fn probe_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site: Leptos SSR + `/pkg` bundle + probes, traced.
pub fn app(leptos_options: LeptosOptions, motion: MotionConfig) -> Router {
    let routes = generate_route_list(folio_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || folio_client::app::shell(opts.clone(), motion.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    probe_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
