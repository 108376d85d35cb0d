// src/handlers/mod.rs
pub mod chat;
pub mod report;

/// Default route: every method and path outside the API answers with a plain
/// liveness string.
pub async fn service_online() -> &'static str {
    "Service Online"
}
