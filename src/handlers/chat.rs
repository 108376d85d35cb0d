// src/handlers/chat.rs
use crate::inference::DEFAULT_MODEL;
use crate::models::chat::{
    ChatErrorResponse, ChatRequest, ChatResponse, ErrorResponse, StudySession, DB_STATUS_OK,
    GUIDE_FALLBACK, MODEL_STATUS_ERROR, MODEL_STATUS_OK, THINKING_FALLBACK, VEC_STATUS_OK,
};
use crate::prompt::socratic_prompt;
use crate::AppState;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{post, Router},
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

pub fn chat_routes() -> Router {
    Router::new().route(
        "/api/chat",
        post(chat_turn).fallback(crate::handlers::service_online),
    )
}

#[derive(Debug)]
enum ChatError {
    /// A required request field is missing or empty.
    MissingField(&'static str),
    /// The model invocation failed; `details` carries the cause.
    ModelFailure { model_id: String, details: String },
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            ChatError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("{} is required", field),
                }),
            )
                .into_response(),
            ChatError::ModelFailure { model_id, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatErrorResponse {
                    error: format!("模型 {} 加载失败，请检查配置", model_id),
                    model_status: MODEL_STATUS_ERROR.to_string(),
                    details,
                }),
            )
                .into_response(),
        }
    }
}

async fn chat_turn(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let question = require_field(payload.question.as_deref(), "question")?;
    let student_id = require_field(payload.student_id.as_deref(), "student_id")?;
    let grade = require_field(payload.grade.as_deref(), "grade")?;
    let subject = require_field(payload.subject.as_deref(), "subject")?;

    // An empty model override falls back to the default, like a missing one.
    let model_id = payload
        .model_config
        .as_ref()
        .and_then(|config| config.model.as_deref())
        .filter(|model| !model.is_empty())
        .unwrap_or(DEFAULT_MODEL);
    let language = payload.language.as_deref().unwrap_or("zh");

    let prompt = socratic_prompt(grade, subject, question, language);

    tracing::debug!("Invoking model {} for student {}", model_id, student_id);

    let reply = state.inference.invoke(model_id, &prompt).await.map_err(|e| {
        tracing::error!("Model {} invocation failed: {}", model_id, e);
        ChatError::ModelFailure {
            model_id: model_id.to_string(),
            details: e.to_string(),
        }
    })?;

    // Empty reply fields coalesce to the placeholders, like missing ones.
    let guide_message = reply
        .response
        .filter(|text| !text.is_empty())
        .or(reply.answer.filter(|text| !text.is_empty()))
        .unwrap_or_else(|| GUIDE_FALLBACK.to_string());
    let thinking = reply
        .thinking
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| THINKING_FALLBACK.to_string());

    let session = StudySession {
        student_id: student_id.to_string(),
        grade: grade.to_string(),
        subject: subject.to_string(),
        question: question.to_string(),
        response: guide_message.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    // Persistence is best effort; a failed insert must not block the reply.
    if let Err(e) = state.store.record_session(&session).await {
        tracing::error!("Failed to record study session for {}: {}", student_id, e);
    }

    Ok(Json(ChatResponse {
        guide_message,
        thinking,
        db_status: DB_STATUS_OK.to_string(),
        vec_status: VEC_STATUS_OK.to_string(),
        model_status: MODEL_STATUS_OK.to_string(),
    }))
}

fn require_field<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ChatError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ChatError::MissingField(name)),
    }
}
