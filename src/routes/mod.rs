//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the content API together with the static marketing
//! site under a single Axum router. The site is served as static files at
//! `/`; the listing and detail views fetch their render data from `/api`.

pub mod blogs;
pub mod contact;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the application router: API routes, health check, static site.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/blogs/{key}", get(blogs::get_blog))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/newsletter", post(contact::subscribe_newsletter))
        .route("/healthz", get(healthz))
        .layer(cors)
        .fallback_service(ServeDir::new(website_dir))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
