//! HTTP gateway implementation
//!
//! POSTs the question payload to the configured endpoint and maps the
//! response onto the [`GatewayError`] taxonomy. Payload interpretation lives
//! in standalone functions so it stays testable without a server.

use super::{AgentGateway, GatewayError};
use crate::config::EndpointConfig;
use crate::error_log;
use crate::ids::SessionId;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Gateway client over HTTP
pub struct HttpGateway {
    http_client: HttpClient,
    url: String,
}

impl HttpGateway {
    /// Build a client for the given endpoint.
    ///
    /// The timeout here is transport-level only; the lifecycle controller
    /// itself never times a request out.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(endpoint.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            url: endpoint.url.clone(),
        })
    }
}

/// Wire shape of an outbound question.
#[derive(Serialize)]
struct AskRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    action: &'a str,
    q: &'a str,
}

#[async_trait]
impl AgentGateway for HttpGateway {
    async fn ask(&self, session: &SessionId, question: &str) -> Result<String, GatewayError> {
        let body = AskRequest {
            session_id: session.as_str(),
            action: "sendMessage",
            q: question,
        };

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error_log!("request to {} failed: {}", self.url, e);
                GatewayError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| GatewayError::Transport {
            message: e.to_string(),
        })?;

        if status.is_success() {
            extract_answer(&text)
        } else {
            Err(GatewayError::Gateway {
                status: status.as_u16(),
                message: extract_failure_message(status.as_u16(), &text),
            })
        }
    }
}

/// Pull the answer out of a success payload.
///
/// `output` wins over `response`; the first non-empty field counts. A body
/// that is not JSON, or carries neither field, is a malformed response.
fn extract_answer(body: &str) -> Result<String, GatewayError> {
    let value: Value = serde_json::from_str(body).map_err(|_| GatewayError::MalformedResponse)?;
    for key in ["output", "response"] {
        if let Some(answer) = value.get(key).and_then(Value::as_str) {
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }
    Err(GatewayError::MalformedResponse)
}

/// Diagnostic for a non-success status: a structured `message`/`error` field
/// if present, the raw body if not, a status line when the body is empty.
fn extract_failure_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("The agent gateway returned status {} with no details.", status)
    } else {
        trimmed.to_string()
    }
}
