//! # Channel Configuration
//!
//! SMTP and SMS provider settings, loaded from environment variables.

use plug_core::{PlugError, PlugResult};
use std::env;

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SMS_API_BASE_URL: &str = "https://api.twilio.com";

fn required_var(name: &str) -> PlugResult<String> {
    env::var(name).map_err(|_| PlugError::Configuration(format!("{} not set", name)))
}

/// SMTP relay settings
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host (e.g. smtp.gmail.com)
    pub server: String,

    /// Submission port, STARTTLS is always negotiated
    pub port: u16,

    /// Login name, also used as the `From` address
    pub username: String,

    pub password: String,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SMTP_SERVER`
    /// - `SMTP_USERNAME`
    /// - `SMTP_PASSWORD`
    ///
    /// `SMTP_PORT` defaults to 587.
    pub fn from_env() -> PlugResult<Self> {
        dotenvy::dotenv().ok();

        let server = required_var("SMTP_SERVER")?;
        let username = required_var("SMTP_USERNAME")?;
        let password = required_var("SMTP_PASSWORD")?;

        let port = match env::var("SMTP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                PlugError::Configuration(format!("SMTP_PORT is not a valid port: {}", raw))
            })?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            server,
            port,
            username,
            password,
        })
    }

    pub fn new(
        server: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// SMS REST API settings (Twilio-compatible)
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,

    /// Sender number in E.164 form
    pub from_number: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl SmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SMS_ACCOUNT_SID`
    /// - `SMS_AUTH_TOKEN`
    /// - `SMS_FROM_NUMBER`
    ///
    /// `SMS_API_BASE_URL` defaults to the Twilio API.
    pub fn from_env() -> PlugResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            account_sid: required_var("SMS_ACCOUNT_SID")?,
            auth_token: required_var("SMS_AUTH_TOKEN")?,
            from_number: required_var("SMS_FROM_NUMBER")?,
            api_base_url: env::var("SMS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SMS_API_BASE_URL.to_string()),
        })
    }

    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            api_base_url: DEFAULT_SMS_API_BASE_URL.to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Endpoint that creates a message for this account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}
