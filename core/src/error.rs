use apwatch_common::config::ConfigError;
use thiserror::Error;

/// Failures of a single exchange with the access point.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Why a scanner could not be constructed.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot reach access point at {host}")]
    Unreachable {
        host: String,
        #[source]
        source: GatewayError,
    },
    #[error("cannot log in to access point at {host} (HTTP {status})")]
    AuthFailed { host: String, status: u16 },
    #[error("cannot connect to access point at {host}: status page answered with HTTP {status}")]
    ProbeFailed { host: String, status: u16 },
}

impl ConnectionError {
    /// Classifies a failed login during construction.
    pub(crate) fn from_login(host: &str, err: GatewayError) -> Self {
        match err {
            GatewayError::Status { status, .. } => Self::AuthFailed {
                host: host.to_string(),
                status,
            },
            source => Self::Unreachable {
                host: host.to_string(),
                source,
            },
        }
    }
}
