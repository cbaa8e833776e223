//! Error types for contact message delivery

use thiserror::Error;

/// Errors that can occur while delivering a contact message.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required delivery setting is absent. No request was made.
    #[error("delivery configuration missing: {0}")]
    MissingConfig(&'static str),

    /// The HTTP request could not be completed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The email service answered with a non-success status.
    #[error("email service rejected the message ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, as returned.
        message: String,
    },
}

impl GatewayError {
    /// Whether the failure came from missing configuration rather than delivery.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_display_names_key() {
        let err = GatewayError::MissingConfig("service_id");
        assert_eq!(err.to_string(), "delivery configuration missing: service_id");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_rejected_display_includes_status() {
        let err = GatewayError::Rejected {
            status: 400,
            message: "The template ID is invalid".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(!err.is_config_error());
    }
}
