use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Timeout applied to every request sent to the access point.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,
    #[error("host '{0}' must be a bare hostname or host:port, without scheme or path")]
    MalformedHost(String),
}

/// Connection settings for a single access point.
///
/// Supplied once when the scanner is built and never mutated afterwards.
#[derive(Clone)]
pub struct ScannerConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Skips certificate verification when `false`.
    ///
    /// Only the HTTP clients owned by the scanner are affected.
    pub verify_tls: bool,
}

impl ScannerConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            verify_tls: true,
        }
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Checks that `host` can be spliced into `https://{host}/...`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if host != self.host
            || host.contains("://")
            || host.contains(['/', '?', '#', '@'])
            || host.contains(char::is_whitespace)
        {
            return Err(ConfigError::MalformedHost(self.host.clone()));
        }
        Ok(())
    }
}

impl fmt::Debug for ScannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScannerConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

/// Terminal output settings for the command line host.
pub struct Config {
    /// 0 prints everything, 1 drops headers and banners, 2 prints only the identifiers.
    pub quiet: u8,
    pub no_banner: bool,
}
