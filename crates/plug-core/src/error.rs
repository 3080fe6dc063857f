//! # Error Types
//!
//! Typed errors for the pluggable strategies.
//! Constructors, config loaders and channel deliveries return `Result<T, PlugError>`.

use thiserror::Error;

/// Core error type shared by every strategy crate
#[derive(Debug, Error)]
pub enum PlugError {
    /// Configuration errors (missing env vars, unparsable values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A strategy name that does not map to any implementation
    #[error("Unknown {kind} strategy: {name}")]
    UnknownStrategy { kind: String, name: String },

    /// Malformed email address or phone number
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A channel accepted the request but could not deliver it
    #[error("Delivery failed [{channel}]: {message}")]
    DeliveryFailed { channel: String, message: String },

    /// Network/HTTP error talking to a provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Provider answered with an error response
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PlugError {
    /// Build an `UnknownStrategy` error
    pub fn unknown_strategy(kind: impl Into<String>, name: impl Into<String>) -> Self {
        PlugError::UnknownStrategy {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Short machine-readable label, used as a tracing field
    pub fn kind(&self) -> &'static str {
        match self {
            PlugError::Configuration(_) => "configuration",
            PlugError::InvalidRequest(_) => "invalid_request",
            PlugError::UnknownStrategy { .. } => "unknown_strategy",
            PlugError::InvalidAddress(_) => "invalid_address",
            PlugError::DeliveryFailed { .. } => "delivery_failed",
            PlugError::NetworkError(_) => "network",
            PlugError::ProviderError { .. } => "provider",
            PlugError::Serialization(_) => "serialization",
        }
    }
}

/// Result type alias for strategy operations
pub type PlugResult<T> = Result<T, PlugError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlugError::unknown_strategy("discount", "gold");
        assert_eq!(err.to_string(), "Unknown discount strategy: gold");

        let err = PlugError::ProviderError {
            provider: "sms".into(),
            message: "bad number".into(),
        };
        assert_eq!(err.to_string(), "Provider error [sms]: bad number");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(PlugError::NetworkError("timeout".into()).kind(), "network");
        assert_eq!(
            PlugError::InvalidAddress("nope".into()).kind(),
            "invalid_address"
        );
        assert_eq!(
            PlugError::DeliveryFailed {
                channel: "email".into(),
                message: "refused".into()
            }
            .kind(),
            "delivery_failed"
        );
    }
}
