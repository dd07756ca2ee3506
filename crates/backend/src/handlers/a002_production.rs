use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_production::aggregate::Production;

use crate::domain::a002_production;

/// GET /api/productions
pub async fn list_all() -> Result<Json<Vec<Production>>, StatusCode> {
    match a002_production::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list productions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/productions/testdata
pub async fn insert_test_data() -> StatusCode {
    match a002_production::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert test productions: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
