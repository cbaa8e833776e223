//! EmailJS REST client
//!
//! Sends contact messages through the EmailJS `email/send` endpoint. Each
//! call makes exactly one HTTPS request; there is no retry.

use super::error::GatewayError;
use super::traits::{DeliveryReceipt, SubmissionGateway};
use crate::config::DeliveryConfig;
use crate::state::ContactFields;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the send endpoint, relative to the configured API base URL.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Credentials checked for presence before any request is made
#[derive(Debug, PartialEq, Eq)]
struct Credentials<'a> {
    service_id: &'a str,
    template_id: &'a str,
    public_key: &'a str,
}

/// Request body expected by the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

/// Gateway that delivers contact messages through EmailJS
pub struct EmailJsGateway {
    /// HTTP client
    http: Client,
    /// Delivery settings, fixed at construction
    config: DeliveryConfig,
}

impl EmailJsGateway {
    /// Create a new gateway from explicit delivery settings
    pub fn new(config: DeliveryConfig) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    /// Full URL of the send endpoint
    fn send_url(&self) -> String {
        format!("{}{SEND_PATH}", self.config.endpoint.trim_end_matches('/'))
    }

    fn credentials(&self) -> Result<Credentials<'_>, GatewayError> {
        fn present<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, GatewayError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or(GatewayError::MissingConfig(key))
        }

        Ok(Credentials {
            service_id: present(&self.config.service_id, "service_id")?,
            template_id: present(&self.config.template_id, "template_id")?,
            public_key: present(&self.config.public_key, "public_key")?,
        })
    }
}

#[async_trait]
impl SubmissionGateway for EmailJsGateway {
    async fn deliver(&self, fields: &ContactFields) -> Result<DeliveryReceipt, GatewayError> {
        let credentials = self.credentials()?;

        let body = SendRequest {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: fields,
        };

        debug!("Posting contact message to {}", self.send_url());

        let response = self.http.post(self.send_url()).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: text,
            });
        }

        info!("Email sent successfully: {text}");
        Ok(DeliveryReceipt { text })
    }

    fn name(&self) -> &'static str {
        "emailjs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EMAILJS_ENDPOINT;

    fn full_config() -> DeliveryConfig {
        DeliveryConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        }
    }

    fn sample_fields() -> ContactFields {
        ContactFields {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a message.".to_string(),
        }
    }

    mod credentials {
        use super::*;

        #[test]
        fn test_all_present() {
            let gateway = EmailJsGateway::new(full_config()).unwrap();
            let creds = gateway.credentials().unwrap();
            assert_eq!(
                creds,
                Credentials {
                    service_id: "service_abc",
                    template_id: "template_xyz",
                    public_key: "pk_123",
                }
            );
        }

        #[test]
        fn test_missing_service_id() {
            let config = DeliveryConfig {
                service_id: None,
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            assert!(matches!(
                gateway.credentials(),
                Err(GatewayError::MissingConfig("service_id"))
            ));
        }

        #[test]
        fn test_blank_template_id_counts_as_missing() {
            let config = DeliveryConfig {
                template_id: Some("   ".to_string()),
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            assert!(matches!(
                gateway.credentials(),
                Err(GatewayError::MissingConfig("template_id"))
            ));
        }

        #[test]
        fn test_missing_public_key() {
            let config = DeliveryConfig {
                public_key: None,
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            assert!(matches!(
                gateway.credentials(),
                Err(GatewayError::MissingConfig("public_key"))
            ));
        }
    }

    mod request {
        use super::*;

        #[test]
        fn test_send_url_joins_endpoint_and_path() {
            let gateway = EmailJsGateway::new(full_config()).unwrap();
            assert_eq!(
                gateway.send_url(),
                "https://api.emailjs.com/api/v1.0/email/send"
            );
        }

        #[test]
        fn test_send_url_tolerates_trailing_slash() {
            let config = DeliveryConfig {
                endpoint: "http://localhost:8080/".to_string(),
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            assert_eq!(
                gateway.send_url(),
                "http://localhost:8080/api/v1.0/email/send"
            );
        }

        #[test]
        fn test_body_shape() {
            let fields = sample_fields();
            let body = SendRequest {
                service_id: "service_abc",
                template_id: "template_xyz",
                user_id: "pk_123",
                template_params: &fields,
            };
            let json = serde_json::to_value(&body).unwrap();
            assert_eq!(json["service_id"], "service_abc");
            assert_eq!(json["template_id"], "template_xyz");
            assert_eq!(json["user_id"], "pk_123");
            assert_eq!(json["template_params"]["user_name"], "Al");
            assert_eq!(json["template_params"]["user_email"], "a@b.com");
            assert_eq!(json["template_params"]["subject"], "Hello there");
            assert_eq!(json["template_params"]["message"], "This is a message.");
        }
    }

    mod deliver {
        use super::*;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};

        /// Read one HTTP request, headers and body, from the stream
        async fn read_request(stream: &mut TcpStream) -> String {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).into_owned();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let line = line.to_ascii_lowercase();
                            let value = line.strip_prefix("content-length:")?.trim().parse::<usize>().ok();
                            value
                        })
                        .unwrap_or(0);
                    if buf.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            String::from_utf8_lossy(&buf).into_owned()
        }

        /// Serve a single canned response on a local port.
        ///
        /// The handle resolves to the raw request and the number of extra
        /// connections seen shortly afterwards.
        async fn serve_once(
            status_line: &'static str,
            body: &'static str,
        ) -> (String, tokio::task::JoinHandle<(String, usize)>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let endpoint = format!("http://{}", listener.local_addr().unwrap());

            let handle = tokio::spawn(async move {
                let (mut stream, _) = listener.accept().await.unwrap();
                let request = read_request(&mut stream).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();

                let mut extra = 0;
                while tokio::time::timeout(Duration::from_millis(200), listener.accept())
                    .await
                    .is_ok()
                {
                    extra += 1;
                }
                (request, extra)
            });

            (endpoint, handle)
        }

        #[tokio::test]
        async fn test_success_response_returns_receipt() {
            let (endpoint, server) = serve_once("200 OK", "OK").await;
            let gateway = EmailJsGateway::new(DeliveryConfig {
                endpoint,
                ..full_config()
            })
            .unwrap();

            let receipt = gateway.deliver(&sample_fields()).await.unwrap();
            assert_eq!(receipt.text, "OK");

            let (request, extra) = server.await.unwrap();
            assert!(request.starts_with("POST /api/v1.0/email/send HTTP/1.1"));
            assert!(request.contains("\"service_id\":\"service_abc\""));
            assert!(request.contains("\"user_id\":\"pk_123\""));
            assert!(request.contains("\"user_name\":\"Al\""));
            assert_eq!(extra, 0);
        }

        #[tokio::test]
        async fn test_error_status_is_rejected_without_retry() {
            let (endpoint, server) =
                serve_once("400 Bad Request", "The template ID is invalid").await;
            let gateway = EmailJsGateway::new(DeliveryConfig {
                endpoint,
                ..full_config()
            })
            .unwrap();

            let result = gateway.deliver(&sample_fields()).await;
            match result {
                Err(GatewayError::Rejected { status, message }) => {
                    assert_eq!(status, 400);
                    assert_eq!(message, "The template ID is invalid");
                }
                other => panic!("expected Rejected, got {other:?}"),
            }

            let (_, extra) = server.await.unwrap();
            assert_eq!(extra, 0);
        }

        #[tokio::test]
        async fn test_missing_config_fails_without_network() {
            // Unroutable endpoint: reaching the network would surface as Network, not MissingConfig
            let config = DeliveryConfig {
                public_key: None,
                endpoint: "http://192.0.2.1:9".to_string(),
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            let result = gateway.deliver(&sample_fields()).await;
            assert!(matches!(result, Err(GatewayError::MissingConfig("public_key"))));
        }

        #[tokio::test]
        async fn test_connection_refused_is_network_error() {
            let config = DeliveryConfig {
                endpoint: "http://127.0.0.1:1".to_string(),
                ..full_config()
            };
            let gateway = EmailJsGateway::new(config).unwrap();
            let result = gateway.deliver(&sample_fields()).await;
            assert!(matches!(result, Err(GatewayError::Network(_))));
        }
    }
}
