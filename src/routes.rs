//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This host only renders and serves the front end. Auth, users, and products
//! live in the external API that the browser calls directly, so the router
//! carries Leptos SSR, the compiled `/pkg` assets, and a health probe.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

fn with_layers(router: Router, config: &HostConfig) -> Router {
    let router = router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http());
    if config.cors_allow_any {
        router.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
    } else {
        router
    }
}

/// Full host router: health probe + Leptos SSR + static assets.
pub fn app(config: &HostConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let router = health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path));
    with_layers(router, config)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
