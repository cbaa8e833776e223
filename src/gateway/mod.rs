//! Submission gateway module for delivering contact messages

mod client;
mod error;
mod simulated;
mod traits;

pub use client::EmailJsGateway;
pub use error::GatewayError;
pub use simulated::{SimulatedGateway, DEFAULT_SIMULATED_DELAY};
pub use traits::{DeliveryReceipt, SubmissionGateway};

#[cfg(test)]
pub use traits::MockSubmissionGateway;

use crate::config::{GatewayMode, PortfolioConfig};
use std::sync::Arc;

/// Build the gateway selected by the configuration
pub fn from_config(config: &PortfolioConfig) -> Result<Arc<dyn SubmissionGateway>, GatewayError> {
    match config.gateway {
        GatewayMode::EmailJs => Ok(Arc::new(EmailJsGateway::new(config.delivery())?)),
        GatewayMode::Simulated => Ok(Arc::new(SimulatedGateway::new(config.simulated_delay()))),
    }
}
