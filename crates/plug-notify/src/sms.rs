//! # SMS Channel
//!
//! Sends text messages through a Twilio-compatible REST API.

use crate::config::SmsConfig;
use async_trait::async_trait;
use plug_core::{NotificationChannel, PlugError, PlugResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

/// SMS notification channel
pub struct SmsNotification {
    config: SmsConfig,
    client: Client,
}

impl SmsNotification {
    pub fn new(config: SmsConfig) -> PlugResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PlugError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PlugResult<Self> {
        Self::new(SmsConfig::from_env()?)
    }

    pub fn from_number(&self) -> &str {
        &self.config.from_number
    }
}

#[async_trait]
impl NotificationChannel for SmsNotification {
    #[instrument(skip(self, message))]
    async fn deliver(&self, message: &str, recipient: &str) -> PlugResult<()> {
        if recipient.trim().is_empty() {
            return Err(PlugError::InvalidAddress("empty phone number".to_string()));
        }

        let params = [
            ("Body", message),
            ("From", self.config.from_number.as_str()),
            ("To", recipient),
        ];

        let response = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| PlugError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlugError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("SMS API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<SmsErrorResponse>(&body) {
                return Err(PlugError::ProviderError {
                    provider: "sms".to_string(),
                    message: error_response.message,
                });
            }

            return Err(PlugError::ProviderError {
                provider: "sms".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let created: SmsMessageResponse = serde_json::from_str(&body).map_err(|e| {
            PlugError::Serialization(format!("Failed to parse SMS API response: {}", e))
        })?;

        debug!(sid = %created.sid, status = ?created.status, "SMS accepted");
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "sms"
    }
}

// =============================================================================
// SMS API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SmsMessageResponse {
    sid: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SmsErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

    fn channel(server: &MockServer) -> SmsNotification {
        let config = SmsConfig::new("AC123", "token", "+1234567890").with_api_base_url(server.uri());
        SmsNotification::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(header_exists("authorization"))
            .and(body_string_contains("To=%2B16465386464"))
            .and(body_string_contains("From=%2B1234567890"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_string(r#"{"sid":"SM1","status":"queued"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        assert!(channel(&server).send("Important alert!", "+16465386464").await);
    }

    #[tokio::test]
    async fn test_provider_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"code":21211,"message":"The 'To' number is not valid.","status":400}"#,
            ))
            .mount(&server)
            .await;

        let err = channel(&server).deliver("hi", "+1").await.unwrap_err();
        match err {
            PlugError::ProviderError { provider, message } => {
                assert_eq!(provider, "sms");
                assert_eq!(message, "The 'To' number is not valid.");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_becomes_false() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        assert!(!channel(&server).send("hi", "+16465386464").await);
    }

    #[tokio::test]
    async fn test_empty_recipient_is_rejected_locally() {
        let server = MockServer::start().await;

        let err = channel(&server).deliver("hi", "  ").await.unwrap_err();
        assert!(matches!(err, PlugError::InvalidAddress(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
