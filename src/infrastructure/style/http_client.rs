use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body some services return alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    code: serde_json::Value,
    message: String,
}

pub(crate) fn status_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ServerErrorBody>(body) {
        Ok(parsed) => {
            let code = match parsed.code {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            format!("Server returned {}, code {}: {}", status, code, parsed.message)
        }
        Err(_) => format!("Server returned {}", status),
    }
}

fn map_send_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::timeout(format!("Request timed out: {}", e))
    } else {
        DomainError::transport(format!("Request failed: {}", e))
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::http_status(
                status.as_u16(),
                status_error_message(status.as_u16(), &error_body),
            ));
        }

        let text = response.text().await.map_err(map_send_error)?;
        serde_json::from_str(&text)
            .map_err(|e| DomainError::protocol(format!("Failed to parse response: {}", e)))
    }
}
