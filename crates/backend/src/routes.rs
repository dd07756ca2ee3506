use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Все маршруты приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // СПРАВОЧНИКИ
        // ========================================
        .route("/api/products", get(handlers::a001_product::list_all))
        .route(
            "/api/products/testdata",
            post(handlers::a001_product::insert_test_data),
        )
        .route("/api/productions", get(handlers::a002_production::list_all))
        .route(
            "/api/productions/testdata",
            post(handlers::a002_production::insert_test_data),
        )
        // ========================================
        // ПОТЕРИ ПРОИЗВОДСТВА
        // ========================================
        .route(
            "/api/lost",
            get(handlers::a003_production_loss::list_all)
                .post(handlers::a003_production_loss::create),
        )
        .route(
            "/api/lost/:id",
            get(handlers::a003_production_loss::get_by_id)
                .put(handlers::a003_production_loss::update)
                .delete(handlers::a003_production_loss::delete),
        )
        // Журнал событий сервера
        .route(
            "/api/logs",
            get(handlers::logs::list_all).delete(handlers::logs::clear_all),
        )
}
