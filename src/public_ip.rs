//! Public IP discovery.
//!
//! Asks an ipify-compatible service for the caller's own address. The
//! service answers `{"ip": "<dotted-quad>"}`.

use log::debug;
use serde::Deserialize;

use crate::config::PUBLIC_IP_TIMEOUT;
use crate::error_handling::{describe_reqwest_error, LookupError};

#[derive(Debug, Deserialize)]
struct PublicIpResponse {
    ip: String,
}

/// Client for the public-IP service.
#[derive(Debug, Clone)]
pub struct PublicIpClient {
    client: reqwest::Client,
    url: String,
}

impl PublicIpClient {
    /// Creates a client calling `url`.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetches the caller's public IP.
    ///
    /// One request with a fixed five-second timeout; no retry.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::PublicIpError` on timeout, connection failure,
    /// non-2xx status, or a body without a usable `ip` field.
    pub async fn fetch(&self) -> Result<String, LookupError> {
        debug!("Requesting public IP from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .timeout(PUBLIC_IP_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::PublicIpError(describe_reqwest_error(&e)))?;

        let body: PublicIpResponse = response
            .json()
            .await
            .map_err(|e| LookupError::PublicIpError(describe_reqwest_error(&e)))?;

        let ip = body.ip.trim();
        if ip.is_empty() {
            return Err(LookupError::PublicIpError(
                "the service returned an empty address".to_string(),
            ));
        }
        debug!("Public IP is {ip}");
        Ok(ip.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> PublicIpClient {
        PublicIpClient::new(reqwest::Client::new(), format!("{}/ip", server.uri()))
    }

    #[tokio::test]
    async fn test_fetch_parses_ip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "203.0.113.7"})))
            .expect(1)
            .mount(&server)
            .await;

        let ip = client_for(&server).await.fetch().await.unwrap();
        assert_eq!(ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_public_ip_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, LookupError::PublicIpError(_)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "1.2.3.4"})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, LookupError::PublicIpError(_)));
    }

    #[tokio::test]
    async fn test_fetch_empty_ip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ip": "  "})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch().await.unwrap_err();
        assert!(err.to_string().contains("empty address"));
    }

    #[tokio::test]
    async fn test_fetch_times_out_after_fixed_limit() {
        let server = MockServer::start().await;
        let delay = PUBLIC_IP_TIMEOUT + Duration::from_secs(3);
        Mock::given(method("GET"))
            .and(path("/ip"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ip": "203.0.113.7"}))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;

        // Client-wide timeout is longer; the per-request limit must win
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let public_ip = PublicIpClient::new(client, format!("{}/ip", server.uri()));

        let started = Instant::now();
        let err = public_ip.fetch().await.unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, LookupError::PublicIpError(_)));
        assert!(err.to_string().contains("timed out"), "got: {err}");
        assert!(elapsed < delay, "took {elapsed:?}");
        assert!(elapsed >= PUBLIC_IP_TIMEOUT - Duration::from_millis(100));
    }
}
