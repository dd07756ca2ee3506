use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::LogEntry;
use serde::Deserialize;

use crate::shared::logger;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Например `a003_production_loss`
    pub category: Option<String>,
}

/// GET /api/logs?category=
pub async fn list_all(Query(query): Query<LogQuery>) -> Result<Json<Vec<LogEntry>>, StatusCode> {
    match logger::repository::get_logs(query.category.as_deref()).await {
        Ok(logs) => Ok(Json(logs)),
        Err(e) => {
            tracing::error!("Failed to read system log: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/logs
pub async fn clear_all() -> StatusCode {
    match logger::repository::clear_all_logs().await {
        Ok(removed) => {
            tracing::info!("Cleared {} system log entries", removed);
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            tracing::error!("Failed to clear system log: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
