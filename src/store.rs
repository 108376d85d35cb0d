// src/store.rs
use crate::models::chat::StudySession;
use crate::models::report::SubjectCount;
use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Persistence capability for study sessions. Injected through `AppState` so
/// tests can substitute an in-memory recorder.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Appends one session row. Rows are never updated or deleted.
    async fn record_session(&self, session: &StudySession) -> Result<(), StoreError>;

    /// Per-subject counts for one student. `None` binds SQL NULL and matches
    /// no rows.
    async fn subject_counts(
        &self,
        student_id: Option<&str>,
    ) -> Result<Vec<SubjectCount>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn record_session(&self, session: &StudySession) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO study_sessions (student_id, grade, subject, question, response, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&session.student_id)
        .bind(&session.grade)
        .bind(&session.subject)
        .bind(&session.question)
        .bind(&session.response)
        .bind(&session.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn subject_counts(
        &self,
        student_id: Option<&str>,
    ) -> Result<Vec<SubjectCount>, StoreError> {
        let counts = sqlx::query_as::<_, SubjectCount>(
            "SELECT subject, COUNT(*) AS count FROM study_sessions WHERE student_id = $1 GROUP BY subject",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
