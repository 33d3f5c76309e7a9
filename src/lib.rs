use axum::Router;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod data;
pub mod db;
pub mod features;
pub mod handlers;
pub mod logging;
pub mod schema;
pub mod utils;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// The API under `/api`, with permissive CORS and request tracing.
pub fn app(pool: DbPool) -> Router {
    Router::new()
        .nest("/api", handlers::api_router())
        .with_state(pool)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// `app` plus the built client, with unknown paths falling back to its
/// `index.html` so client-side routes survive a reload.
pub fn app_with_static(pool: DbPool, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    app(pool).fallback_service(spa)
}
