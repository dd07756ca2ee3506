use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_production_loss::{ProductionLoss, ProductionLossDto};
use contracts::shared::api_error::ApiErrorResponse;

use crate::domain::a003_production_loss::{service, LossServiceError};

type ApiError = (StatusCode, Json<ApiErrorResponse>);

fn into_api_error(err: LossServiceError) -> ApiError {
    let status = match &err {
        LossServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        LossServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        LossServiceError::Storage(e) => {
            tracing::error!("Production loss storage error: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorResponse::new("Error interno del servidor")),
            );
        }
    };
    (status, Json(ApiErrorResponse::new(err.to_string())))
}

/// GET /api/lost
pub async fn list_all() -> Result<Json<Vec<ProductionLoss>>, ApiError> {
    service::list_all().await.map(Json).map_err(into_api_error)
}

/// GET /api/lost/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ProductionLoss>, ApiError> {
    service::get_by_id(&id)
        .await
        .map(Json)
        .map_err(into_api_error)
}

/// POST /api/lost
pub async fn create(
    Json(dto): Json<ProductionLossDto>,
) -> Result<(StatusCode, Json<ProductionLoss>), ApiError> {
    service::create(dto)
        .await
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(into_api_error)
}

/// PUT /api/lost/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProductionLossDto>,
) -> Result<Json<ProductionLoss>, ApiError> {
    service::update(&id, dto)
        .await
        .map(Json)
        .map_err(into_api_error)
}

/// DELETE /api/lost/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    service::delete(&id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(into_api_error)
}
