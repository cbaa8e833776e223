//! Local stand-in for the email service

use super::error::GatewayError;
use super::traits::{DeliveryReceipt, SubmissionGateway};
use crate::state::ContactFields;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Default simulated latency
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Gateway that waits a fixed delay and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn deliver(&self, fields: &ContactFields) -> Result<DeliveryReceipt, GatewayError> {
        tokio::time::sleep(self.delay).await;
        info!(
            "Simulated delivery of message from {} <{}>",
            fields.name, fields.email
        );
        Ok(DeliveryReceipt {
            text: "OK".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
