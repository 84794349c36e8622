// Library root - exports for testing

pub mod config;
pub mod handlers;
pub mod models;
pub mod search;
pub mod store;
pub mod utils;

pub use config::Config;

use std::sync::Arc;

use axum::{routing::get, Router};

use store::CsvStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: CsvStore,
}

/// Builds the API router. Shared by the binary and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/csv-data",
            get(handlers::get_csv_data)
                .post(handlers::add_wallet)
                .delete(handlers::delete_wallet),
        )
        .route("/api/wallets", get(handlers::list_wallets))
        .route("/api/wallets/stats", get(handlers::wallet_stats))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
