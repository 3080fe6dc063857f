//! # Email Channel
//!
//! Sends plain-text notifications through an SMTP relay using STARTTLS.

use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use plug_core::{NotificationChannel, PlugError, PlugResult};
use std::time::Duration;
use tracing::{debug, instrument};

pub const EMAIL_SUBJECT: &str = "System Notification";

/// Email notification channel
pub struct EmailNotification {
    config: SmtpConfig,
}

impl EmailNotification {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> PlugResult<Self> {
        Ok(Self::new(SmtpConfig::from_env()?))
    }

    fn mailbox(address: &str) -> PlugResult<Mailbox> {
        address
            .parse()
            .map_err(|e| PlugError::InvalidAddress(format!("{}: {}", address, e)))
    }

    /// Build the message sent for `text`, without touching the network
    pub fn build_message(&self, text: &str, recipient: &str) -> PlugResult<Message> {
        Message::builder()
            .from(Self::mailbox(&self.config.username)?)
            .to(Self::mailbox(recipient)?)
            .subject(EMAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(text.to_string())
            .map_err(|e| PlugError::InvalidRequest(e.to_string()))
    }

    fn transport(&self) -> PlugResult<AsyncSmtpTransport<Tokio1Executor>> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)
            .map_err(|e| PlugError::Configuration(format!("SMTP relay {}: {}", self.config.server, e)))?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(30)))
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl NotificationChannel for EmailNotification {
    #[instrument(skip(self, message))]
    async fn deliver(&self, message: &str, recipient: &str) -> PlugResult<()> {
        let email = self.build_message(message, recipient)?;
        let mailer = self.transport()?;

        let response = mailer
            .send(email)
            .await
            .map_err(|e| PlugError::DeliveryFailed {
                channel: "email".to_string(),
                message: e.to_string(),
            })?;

        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }

    fn channel_name(&self) -> &'static str {
        "email"
    }
}
