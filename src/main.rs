use socratic_tutor::store::PgSessionStore;
use socratic_tutor::workers_ai_client::WorkersAiClient;
use socratic_tutor::{app, db, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Create the database connection pool (runs migrations on startup)
    let db_pool = db::create_pool()
        .await
        .expect("Failed to create database pool.");

    let account_id =
        std::env::var("CLOUDFLARE_ACCOUNT_ID").expect("CLOUDFLARE_ACCOUNT_ID must be set");
    let api_token =
        std::env::var("CLOUDFLARE_API_TOKEN").expect("CLOUDFLARE_API_TOKEN must be set");
    tracing::info!("Initializing Workers AI inference client...");
    let inference = WorkersAiClient::new(account_id, api_token);

    let shared_state = Arc::new(AppState {
        inference: Arc::new(inference),
        store: Arc::new(PgSessionStore::new(db_pool)),
    });

    let app = app(shared_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

// Production-grade logging configuration
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Get log level from environment or default to INFO for production
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,socratic_tutor=trace,sqlx=info,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,socratic_tutor=info,sqlx=warn,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        // JSON logging for production (easier for log aggregation)
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .boxed()
    } else {
        // Human-readable logging for development
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("📚 Socratic tutor starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) { "development" } else { "production" }
    );
    tracing::info!("Log level: {}", log_level);

    // Log environment configuration
    let db_configured = std::env::var("DATABASE_URL").is_ok();
    let inference_configured = std::env::var("CLOUDFLARE_ACCOUNT_ID").is_ok()
        && std::env::var("CLOUDFLARE_API_TOKEN").is_ok();

    tracing::info!(
        "Configuration - Database: {}, Workers AI: {}",
        if db_configured { "✅" } else { "❌" },
        if inference_configured { "✅" } else { "❌" }
    );

    Ok(())
}
