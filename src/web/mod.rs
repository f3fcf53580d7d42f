//! # HTTP Surface
//!
//! Wires the image discovery API and static asset serving into one axum
//! router. The discovery endpoints answer under `/api`; every other path
//! falls through to the static file service over the public root, so the
//! asset paths the API returns are servable from the same process.

pub mod handlers;

use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::images::ImageLibrary;

/// Shared request state: the lookup core, behind `Arc` in axum state.
pub struct AppState {
    pub library: ImageLibrary,
}

/// Build the full application router.
///
/// # Arguments
/// - `library`: image lookup core rooted at the public dir
/// - `public_dir`: static-assets root served on the fallback route
pub fn router(library: ImageLibrary, public_dir: &Path) -> Router {
    let state = Arc::new(AppState { library });

    Router::new()
        .route("/api/images", get(handlers::images_handler))
        .route("/api/health", get(handlers::health_check))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
