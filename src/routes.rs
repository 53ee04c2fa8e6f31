//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders `/blog` and `/poi` on the server and hydrates them in the
//! browser. The WASM bundle is served from `/pkg`; theme stylesheets and
//! gallery images fall through to the public asset directory.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use site::Catalog;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::ServerError;

/// Full site router: redirects, health check, Leptos SSR, and static assets.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded.
pub fn app(config: &SiteConfig, catalog: Catalog) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list({
        let catalog = catalog.clone();
        move || view! { <App catalog=catalog.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), catalog.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_root() -> Redirect {
    Redirect::temporary("/blog")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
