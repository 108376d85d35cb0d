// src/workers_ai_client.rs
use crate::inference::{InferenceBackend, InferenceError, InferenceReply};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Cloudflare Workers AI client. Text generation goes through the
/// account-scoped `ai/run` endpoint with a bearer token.
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    client: Client,
    account_id: String,
    api_token: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    prompt: &'a str,
}

/// Standard Cloudflare v4 API envelope around the model output.
#[derive(Debug, Deserialize)]
struct RunEnvelope {
    result: Option<InferenceReply>,
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    code: i64,
    message: String,
}

impl WorkersAiClient {
    pub fn new(account_id: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            account_id,
            api_token,
            base_url: "https://api.cloudflare.com/client/v4".to_string(),
        }
    }
}

#[async_trait]
impl InferenceBackend for WorkersAiClient {
    async fn invoke(&self, model: &str, prompt: &str) -> Result<InferenceReply, InferenceError> {
        let url = format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, model
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&RunRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        tracing::debug!("Workers AI response (status {}): {}", status, response_text);

        if !status.is_success() {
            return Err(InferenceError::ApiError {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let envelope: RunEnvelope = serde_json::from_str(&response_text)?;

        if !envelope.success {
            let message = envelope
                .errors
                .first()
                .map(|e| format!("{} (code {})", e.message, e.code))
                .unwrap_or_else(|| "Model reported failure without details".to_string());
            return Err(InferenceError::ModelError(message));
        }

        envelope.result.ok_or_else(|| {
            InferenceError::ModelError("Model response carried no result".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_serializes_prompt_only() {
        let body = serde_json::to_value(RunRequest { prompt: "引导学生" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "引导学生" }));
    }

    #[test]
    fn test_envelope_deserializes_success() {
        let envelope: RunEnvelope = serde_json::from_str(
            r#"{
                "result": { "response": "想一想光的散射", "thinking": "链式推理" },
                "success": true,
                "errors": [],
                "messages": []
            }"#,
        )
        .unwrap();

        assert!(envelope.success);
        let result = envelope.result.unwrap();
        assert_eq!(result.response.as_deref(), Some("想一想光的散射"));
        assert_eq!(result.answer, None);
        assert_eq!(result.thinking.as_deref(), Some("链式推理"));
    }

    #[test]
    fn test_envelope_deserializes_failure() {
        let envelope: RunEnvelope = serde_json::from_str(
            r#"{
                "result": null,
                "success": false,
                "errors": [{ "code": 5016, "message": "No such model" }]
            }"#,
        )
        .unwrap();

        assert!(!envelope.success);
        assert!(envelope.result.is_none());
        assert_eq!(envelope.errors[0].code, 5016);
        assert_eq!(envelope.errors[0].message, "No such model");
    }

    #[test]
    fn test_envelope_tolerates_answer_only_models() {
        let envelope: RunEnvelope = serde_json::from_str(
            r#"{ "result": { "answer": "A" }, "success": true }"#,
        )
        .unwrap();

        let result = envelope.result.unwrap();
        assert_eq!(result.answer.as_deref(), Some("A"));
        assert_eq!(result.response, None);
    }
}
