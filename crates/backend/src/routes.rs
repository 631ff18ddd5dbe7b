use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM OAUTH ROUTES
        // ========================================
        .route(
            "/api/oauth/authorize",
            get(system::handlers::oauth::authorize),
        )
        .route("/api/oauth/callback", get(system::handlers::oauth::callback))
        .route("/api/oauth/status", get(system::handlers::oauth::status))
        // ========================================
        // USECASE ROUTES
        // ========================================
        // UseCase u508: Create product in Shopify
        .route(
            "/api/u508/products",
            post(api::handlers::usecases::u508_create_product),
        )
}
