use std::time::Duration;

use apwatch_common::config::{ScannerConfig, DEFAULT_TIMEOUT};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{AccessPointGateway, StatusPage};
use crate::endpoint;
use crate::error::GatewayError;

/// Talks to the access point's web interface over HTTPS.
pub struct HttpGateway {
    host: String,
    verify_tls: bool,
    timeout: Duration,
}

/// Cookies handed out by `login.cgi`, held by the client that received them.
///
/// Dropping the session drops the client and its pooled connections.
pub struct HttpSession {
    client: Client,
}

impl HttpGateway {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            host: config.host.clone(),
            verify_tls: config.verify_tls,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Every session gets its own client so that no cookie outlives its scan.
    fn build_client(&self) -> Result<Client, GatewayError> {
        Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .map_err(GatewayError::Client)
    }
}

#[async_trait]
impl AccessPointGateway for HttpGateway {
    type Session = HttpSession;

    async fn login(&self, username: &str, password: &str) -> Result<HttpSession, GatewayError> {
        let client = self.build_client()?;
        let url = endpoint::login_url(&self.host);

        let response = client
            .post(&url)
            .form(&endpoint::login_form(username, password))
            .send()
            .await
            .map_err(|source| GatewayError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::Status {
                url,
                status: status.as_u16(),
            });
        }

        debug!("Logged in to {}", self.host);
        Ok(HttpSession { client })
    }

    async fn fetch_status(
        &self,
        session: &HttpSession,
        unit: u8,
    ) -> Result<StatusPage, GatewayError> {
        let url = endpoint::status_url(&self.host, unit);
        let request_error = |source| GatewayError::Request {
            url: url.clone(),
            source,
        };

        let response = session
            .client
            .get(&url)
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(request_error)?.to_vec();

        debug!("Fetched interface {unit} status page: HTTP {status}, {} bytes", body.len());
        Ok(StatusPage { status, body })
    }
}
