use std::fmt;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, PredictResponse, PredictionClient, PredictionRequest, PredictionResult};

const API_PREFIX: &str = "/api/v1";
const PREDICT_PATH: &str = "/Predictions/predict";

/// Connection info for the prediction service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Compose `{scheme}://{host}:{port}/api/v1`, prepending `http://` when
    /// `host` carries no scheme. Never fails; a bad host only shows up as a
    /// transport error at call time.
    pub fn new(host: impl Into<String>, port: impl fmt::Display) -> Self {
        let host = normalize_host(&host.into());
        let base_url = format!("{}:{}{}", host, port, API_PREFIX);

        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let lower = host.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Client for the writing-style prediction API
#[derive(Debug)]
pub struct StyleClient<C: HttpClientTrait> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClientTrait> StyleClient<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        debug!(base_url = %config.base_url(), "Base URL for StyleClient");
        Self { client, config }
    }

    fn parse_response(json: serde_json::Value) -> Result<PredictionResult, DomainError> {
        let response: PredictResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::protocol(format!("Unexpected prediction payload: {}", e))
        })?;

        Ok(response.prediction)
    }
}

#[async_trait]
impl<C: HttpClientTrait> PredictionClient for StyleClient<C> {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, DomainError> {
        let url = self.config.predict_url();
        let body = serde_json::to_value(request)
            .map_err(|e| DomainError::internal(format!("Failed to encode request: {}", e)))?;

        debug!(
            url = %url,
            model_name = %request.model_name,
            text_len = request.text.len(),
            "Requesting style prediction"
        );

        let result = self
            .client
            .post_json(&url, &body)
            .await
            .and_then(Self::parse_response);

        match &result {
            Ok(prediction) => debug!(authors = prediction.len(), "Prediction received"),
            Err(e) => warn!(model_name = %request.model_name, error = %e, "Prediction failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::infrastructure::style::http_client::mock::MockHttpClient;
    use crate::infrastructure::style::http_client::HttpClient;

    const TEST_URL: &str = "http://localhost:8080/api/v1/Predictions/predict";

    fn local_config(server: &MockServer) -> ClientConfig {
        let addr = server.address();
        ClientConfig::new(addr.ip().to_string(), addr.port())
    }

    #[test]
    fn test_config_prepends_scheme() {
        let config = ClientConfig::new("localhost", "8080");
        assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(config.predict_url(), TEST_URL);
    }

    #[test]
    fn test_config_keeps_existing_scheme() {
        let config = ClientConfig::new("https://api.example.com", 443);
        assert_eq!(config.base_url(), "https://api.example.com:443/api/v1");

        let config = ClientConfig::new("http://10.0.0.2", 9000);
        assert_eq!(config.base_url(), "http://10.0.0.2:9000/api/v1");
    }

    #[test]
    fn test_config_accepts_numeric_or_string_port() {
        assert_eq!(
            ClientConfig::new("localhost", 8080),
            ClientConfig::new("localhost", "8080")
        );
    }

    #[test]
    fn test_config_base_url_shape() {
        for (host, port) in [
            ("localhost", "8080"),
            ("style.internal", "80"),
            ("HTTPS://Upper.example.com", "8443"),
            ("https://api.example.com/", "443"),
            ("", ""),
        ] {
            let base = ClientConfig::new(host, port).base_url().to_string();
            let lower = base.to_ascii_lowercase();

            assert!(
                lower.starts_with("http://") || lower.starts_with("https://"),
                "{base}"
            );
            assert!(base.ends_with("/api/v1"), "{base}");
            assert!(!lower.starts_with("http://http"), "{base}");
        }
    }

    #[tokio::test]
    async fn test_predict_posts_text_and_model_name() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({"prediction": {"Shakespeare": 0.8, "Hemingway": 0.2}}),
        );
        let style = StyleClient::new(client, ClientConfig::new("localhost", "8080"));

        let result = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap();

        assert_eq!(result.get("Shakespeare"), Some(0.8));
        assert_eq!(result.get("Hemingway"), Some(0.2));

        let requests = style.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, TEST_URL);
        assert_eq!(
            requests[0].1,
            serde_json::json!({"text": "hello", "model_name": "mock"})
        );
    }

    #[tokio::test]
    async fn test_predict_propagates_transport_error() {
        let client = MockHttpClient::new().with_error(TEST_URL, "connection refused");
        let style = StyleClient::new(client, ClientConfig::new("localhost", "8080"));

        let err = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_predict_rejects_missing_prediction_field() {
        let client =
            MockHttpClient::new().with_response(TEST_URL, serde_json::json!({"data": {}}));
        let style = StyleClient::new(client, ClientConfig::new("localhost", "8080"));

        let err = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Protocol { status: None, .. }));
    }

    #[tokio::test]
    async fn test_predict_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Predictions/predict"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"text": "hello", "model_name": "mock"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "prediction": {"Shakespeare": 0.8, "Hemingway": 0.2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let style = StyleClient::new(HttpClient::new(), local_config(&server));
        let result = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap();

        let expected: PredictionResult =
            [("Shakespeare", 0.8), ("Hemingway", 0.2)].into_iter().collect();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_identical_requests_are_not_cached() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/Predictions/predict"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"prediction": {"Austen": 1.0}})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let style = StyleClient::new(HttpClient::new(), local_config(&server));
        let request = PredictionRequest::new("same", "small");

        style.predict(&request).await.unwrap();
        style.predict(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "code": 42,
                "message": "unknown model"
            })))
            .mount(&server)
            .await;

        let style = StyleClient::new(HttpClient::new(), local_config(&server));
        let err = style
            .predict(&PredictionRequest::new("hello", "huge"))
            .await
            .unwrap_err();

        match err {
            DomainError::Protocol { status, message } => {
                assert_eq!(status, Some(422));
                assert_eq!(message, "Server returned 422, code 42: unknown model");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let style = StyleClient::new(HttpClient::new(), local_config(&server));
        let err = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Protocol { status: None, .. }));
    }

    #[tokio::test]
    async fn test_transport_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"prediction": {}}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let http = HttpClient::with_timeout(Duration::from_millis(50)).unwrap();
        let style = StyleClient::new(http, local_config(&server));
        let err = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClientConfig::new("127.0.0.1", port);

        let style = StyleClient::new(HttpClient::new(), config);
        let err = style
            .predict(&PredictionRequest::new("hello", "mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Transport { .. }));
    }
}
