use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::aggregate::Product;

use crate::domain::a001_product;

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    match a001_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/products/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_product::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert test products: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
