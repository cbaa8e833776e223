//! Configuration handling for the portfolio

use crate::gateway::DEFAULT_SIMULATED_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default EmailJS API base URL
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";

const ENV_SERVICE_ID: &str = "FOLIO_EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "FOLIO_EMAILJS_TEMPLATE_ID";
const ENV_PUBLIC_KEY: &str = "FOLIO_EMAILJS_PUBLIC_KEY";
const ENV_ENDPOINT: &str = "FOLIO_EMAILJS_ENDPOINT";
const ENV_GATEWAY: &str = "FOLIO_GATEWAY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown gateway '{0}', expected 'emailjs' or 'simulated'")]
    UnknownGateway(String),
}

/// Which submission gateway to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    EmailJs,
    Simulated,
}

impl std::str::FromStr for GatewayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emailjs" => Ok(Self::EmailJs),
            "simulated" => Ok(Self::Simulated),
            other => Err(ConfigError::UnknownGateway(other.to_string())),
        }
    }
}

/// Settings handed to the EmailJS gateway at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: String,
}

/// User configuration for the portfolio
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Delivery backend
    #[serde(default)]
    pub gateway: GatewayMode,
    /// EmailJS service identifier
    pub emailjs_service_id: Option<String>,
    /// EmailJS template identifier
    pub emailjs_template_id: Option<String>,
    /// EmailJS public key
    pub emailjs_public_key: Option<String>,
    /// EmailJS API base URL override
    pub emailjs_endpoint: Option<String>,
    /// Latency of the simulated gateway
    pub simulated_delay_ms: Option<u64>,
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides.
    ///
    /// A missing, unreadable or malformed file falls back to defaults; the
    /// environment overrides are applied either way.
    pub fn load() -> Self {
        let content = Self::read_file().unwrap_or_else(|e| {
            warn!("Failed to read config file, using defaults: {e}");
            None
        });
        Self::from_sources(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Read the config file, if one exists
    fn read_file() -> Result<Option<String>> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Ok(Some(fs::read_to_string(&path)?));
            }
        }

        Ok(None)
    }

    /// Build the configuration from optional file content and a key lookup
    fn from_sources<F>(file: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = match file {
            Some(content) => serde_json::from_str(content).unwrap_or_else(|e| {
                warn!("Ignoring malformed config file: {e}");
                Self::default()
            }),
            None => Self::default(),
        };
        config.apply_overrides(lookup);
        config
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SERVICE_ID) {
            self.emailjs_service_id = Some(v);
        }
        if let Some(v) = lookup(ENV_TEMPLATE_ID) {
            self.emailjs_template_id = Some(v);
        }
        if let Some(v) = lookup(ENV_PUBLIC_KEY) {
            self.emailjs_public_key = Some(v);
        }
        if let Some(v) = lookup(ENV_ENDPOINT) {
            self.emailjs_endpoint = Some(v);
        }
        if let Some(v) = lookup(ENV_GATEWAY) {
            match v.parse() {
                Ok(mode) => self.gateway = mode,
                Err(e) => warn!("Ignoring {ENV_GATEWAY}: {e}"),
            }
        }
    }

    /// Settings for the EmailJS gateway
    pub fn delivery(&self) -> DeliveryConfig {
        DeliveryConfig {
            service_id: self.emailjs_service_id.clone(),
            template_id: self.emailjs_template_id.clone(),
            public_key: self.emailjs_public_key.clone(),
            endpoint: self
                .emailjs_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
        }
    }

    /// Latency of the simulated gateway
    pub fn simulated_delay(&self) -> Duration {
        self.simulated_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SIMULATED_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.gateway, GatewayMode::EmailJs);
        assert!(config.emailjs_service_id.is_none());
        assert!(config.emailjs_template_id.is_none());
        assert!(config.emailjs_public_key.is_none());
        assert!(config.emailjs_endpoint.is_none());
        assert!(config.simulated_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: PortfolioConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PortfolioConfig::default());
    }

    #[test]
    fn test_deserialize_gateway_lowercase() {
        let json = r#"{"gateway": "simulated", "simulated_delay_ms": 10}"#;
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gateway, GatewayMode::Simulated);
        assert_eq!(parsed.simulated_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"emailjs_service_id": "svc", "unknown_field": "value"}"#;
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.emailjs_service_id, Some("svc".to_string()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = PortfolioConfig {
            gateway: GatewayMode::Simulated,
            emailjs_service_id: Some("svc".to_string()),
            simulated_delay_ms: Some(250),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortfolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = PortfolioConfig {
            emailjs_service_id: Some("from_file".to_string()),
            ..Default::default()
        };
        config.apply_overrides(lookup_from(&[
            (ENV_SERVICE_ID, "from_env"),
            (ENV_TEMPLATE_ID, "tpl"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_ENDPOINT, "http://localhost:3000"),
            (ENV_GATEWAY, "Simulated"),
        ]));

        assert_eq!(config.emailjs_service_id, Some("from_env".to_string()));
        assert_eq!(config.emailjs_template_id, Some("tpl".to_string()));
        assert_eq!(config.emailjs_public_key, Some("pk".to_string()));
        assert_eq!(config.gateway, GatewayMode::Simulated);
        assert_eq!(config.delivery().endpoint, "http://localhost:3000");
    }

    #[test]
    fn test_unknown_gateway_override_is_ignored() {
        let mut config = PortfolioConfig::default();
        config.apply_overrides(lookup_from(&[(ENV_GATEWAY, "carrier-pigeon")]));
        assert_eq!(config.gateway, GatewayMode::EmailJs);
    }

    #[test]
    fn test_gateway_mode_from_str() {
        assert_eq!("emailjs".parse::<GatewayMode>(), Ok(GatewayMode::EmailJs));
        assert_eq!(" SIMULATED ".parse::<GatewayMode>(), Ok(GatewayMode::Simulated));
        assert_eq!(
            "smtp".parse::<GatewayMode>(),
            Err(ConfigError::UnknownGateway("smtp".to_string()))
        );
    }

    #[test]
    fn test_delivery_defaults_endpoint() {
        let delivery = PortfolioConfig::default().delivery();
        assert_eq!(delivery.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert!(delivery.service_id.is_none());
    }

    #[test]
    fn test_simulated_delay_default() {
        let config = PortfolioConfig::default();
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_from_sources_without_file_uses_overrides() {
        let config = PortfolioConfig::from_sources(None, lookup_from(&[(ENV_SERVICE_ID, "svc")]));
        assert_eq!(config.emailjs_service_id, Some("svc".to_string()));
        assert_eq!(config.gateway, GatewayMode::EmailJs);
    }

    #[test]
    fn test_malformed_file_keeps_environment_credentials() {
        let config = PortfolioConfig::from_sources(
            Some("{ not json"),
            lookup_from(&[
                (ENV_SERVICE_ID, "svc"),
                (ENV_TEMPLATE_ID, "tpl"),
                (ENV_PUBLIC_KEY, "pk"),
            ]),
        );
        let delivery = config.delivery();
        assert_eq!(delivery.service_id, Some("svc".to_string()));
        assert_eq!(delivery.template_id, Some("tpl".to_string()));
        assert_eq!(delivery.public_key, Some("pk".to_string()));
        assert_eq!(delivery.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    }

    #[test]
    fn test_file_values_then_overrides() {
        let json = r#"{"gateway": "simulated", "emailjs_service_id": "from_file", "emailjs_template_id": "tpl"}"#;
        let config =
            PortfolioConfig::from_sources(Some(json), lookup_from(&[(ENV_SERVICE_ID, "from_env")]));
        assert_eq!(config.gateway, GatewayMode::Simulated);
        assert_eq!(config.emailjs_service_id, Some("from_env".to_string()));
        assert_eq!(config.emailjs_template_id, Some("tpl".to_string()));
    }
}
