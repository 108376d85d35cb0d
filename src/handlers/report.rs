// src/handlers/report.rs
use crate::models::chat::ErrorResponse;
use crate::models::report::{ReportQuery, SubjectCount};
use crate::AppState;
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Json,
    routing::{get, Router},
};
use std::sync::Arc;

pub fn report_routes() -> Router {
    Router::new().route(
        "/api/report",
        get(study_report).fallback(crate::handlers::service_online),
    )
}

/// Per-subject session counts for the student in `sid`. Without `sid` the
/// filter matches nothing and the report is empty.
async fn study_report(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<Vec<SubjectCount>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.subject_counts(params.sid.as_deref()).await {
        Ok(counts) => Ok(Json(counts)),
        Err(e) => {
            tracing::error!("Failed to aggregate study report: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "学习报告生成失败，请稍后再试".to_string(),
                }),
            ))
        }
    }
}
