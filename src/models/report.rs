// src/models/report.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub sid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubjectCount {
    pub subject: String,
    pub count: i64,
}
