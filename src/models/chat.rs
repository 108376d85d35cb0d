// src/models/chat.rs
use serde::{Deserialize, Serialize};

// Status literals the tutoring frontend displays verbatim.
pub const DB_STATUS_OK: &str = "● 存储成功";
pub const VEC_STATUS_OK: &str = "● 索引活跃";
pub const MODEL_STATUS_OK: &str = "● 模型正常";
pub const MODEL_STATUS_ERROR: &str = "● 模型异常";

// Placeholders used when the model returns no usable text.
pub const GUIDE_FALLBACK: &str = "导师正在整理逻辑，请稍后...";
pub const THINKING_FALLBACK: &str = "AI 正在深度检索知识库并生成逻辑链...";

/// Incoming chat turn. Every field is optional at the wire level; the handler
/// validates the required ones and answers 400 with the missing field name.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: Option<String>,
    pub student_id: Option<String>,
    pub grade: Option<String>,
    pub subject: Option<String>,
    pub language: Option<String>,
    pub model_config: Option<ModelConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub guide_message: String,
    pub thinking: String,
    pub db_status: String,
    pub vec_status: String,
    pub model_status: String,
}

/// Body returned when the model invocation fails.
#[derive(Debug, Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
    pub model_status: String,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One recorded exchange. `timestamp` is generated server side at write time,
/// ISO-8601 with milliseconds and a `Z` suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub student_id: String,
    pub grade: String,
    pub subject: String,
    pub question: String,
    pub response: String,
    pub timestamp: String,
}
