//! The transport **abstraction** between the scanner and the access point.
//!
//! The scanner only knows that it can open an authenticated session and fetch a status
//! page per radio interface. [`http::HttpGateway`] does this over HTTPS; tests drive the
//! scanner with an in-memory gateway instead.

use async_trait::async_trait;

use crate::error::GatewayError;

pub mod http;

pub use http::{HttpGateway, HttpSession};

/// A status page as returned by the access point, whatever its status code.
#[derive(Debug, Clone)]
pub struct StatusPage {
    pub status: u16,
    pub body: Vec<u8>,
}

impl StatusPage {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait AccessPointGateway: Send + Sync {
    /// Authenticated state carried between requests of the same scan.
    type Session: Send + Sync;

    /// Opens a fresh session. A non-200 answer is a [`GatewayError::Status`].
    async fn login(&self, username: &str, password: &str) -> Result<Self::Session, GatewayError>;

    /// Fetches the client table of radio interface `unit`.
    async fn fetch_status(
        &self,
        session: &Self::Session,
        unit: u8,
    ) -> Result<StatusPage, GatewayError>;
}
