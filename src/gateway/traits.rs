//! Trait abstraction for message delivery to enable mocking in tests

use super::error::GatewayError;
use crate::state::ContactFields;
use async_trait::async_trait;

/// Acknowledgement returned by the delivery service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Opaque response text from the service
    pub text: String,
}

/// The one outbound side effect of the contact form.
///
/// Implementations make at most one delivery attempt per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver already-validated contact fields
    async fn deliver(&self, fields: &ContactFields) -> Result<DeliveryReceipt, GatewayError>;

    /// Short name for logs and the status bar
    fn name(&self) -> &'static str;
}
