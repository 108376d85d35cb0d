use socratic_tutor::db;
use socratic_tutor::models::chat::StudySession;
use socratic_tutor::store::{PgSessionStore, SessionStore};

/// Round-trips sessions through a real Postgres instance.
///
/// Note: requires DATABASE_URL to point at a reachable database. The pool
/// setup runs the migrations, so a fresh database works.
#[tokio::test]
#[ignore = "Requires a running Postgres instance (set DATABASE_URL)"]
async fn records_and_aggregates_sessions() {
    dotenvy::dotenv().ok();

    let pool = db::create_pool()
        .await
        .expect("Failed to create database pool - ensure Postgres is running");
    let store = PgSessionStore::new(pool);

    // Unique student id keeps reruns independent of leftover rows.
    let student_id = format!("it-{}", uuid::Uuid::new_v4());
    let session = StudySession {
        student_id: student_id.clone(),
        grade: "五年级".to_string(),
        subject: "数学".to_string(),
        question: "为什么负负得正".to_string(),
        response: "先想想数轴上的方向代表什么。".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    };

    store.record_session(&session).await.expect("insert failed");
    store.record_session(&session).await.expect("insert failed");

    let mut physics = session.clone();
    physics.subject = "物理".to_string();
    store.record_session(&physics).await.expect("insert failed");

    let mut counts = store
        .subject_counts(Some(&student_id))
        .await
        .expect("aggregate failed");
    counts.sort_by(|a, b| a.subject.cmp(&b.subject));

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].subject, "数学");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].subject, "物理");
    assert_eq!(counts[1].count, 1);

    // A NULL student filter matches no rows, whatever the table holds.
    let none = store.subject_counts(None).await.expect("aggregate failed");
    assert!(none.is_empty());
}
