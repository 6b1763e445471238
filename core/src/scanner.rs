//! Presence scanning against a Linksys access point.
//!
//! A scanner is only handed out once the access point has accepted a login and served a
//! status page, so a misconfigured host or wrong credentials surface at startup. After
//! that, [`AccessPointScanner::scan`] never fails: every scan logs in again, walks the
//! radio interfaces in order and replaces the previous result. A scan that breaks halfway
//! leaves an empty result behind rather than a partial or stale one.

use apwatch_common::config::ScannerConfig;
use apwatch_common::network::device::DeviceRecord;
use apwatch_common::scanning::DeviceScanner;
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::endpoint;
use crate::error::{ConnectionError, GatewayError};
use crate::gateway::{AccessPointGateway, HttpGateway};
use crate::parser::{ClientTableParser, SectionRowParser};

pub struct AccessPointScanner<G = HttpGateway, P = SectionRowParser> {
    config: ScannerConfig,
    gateway: G,
    parser: P,
    last_results: Vec<DeviceRecord>,
}

impl AccessPointScanner {
    /// Builds a scanner talking HTTPS to `config.host`.
    pub async fn connect(config: ScannerConfig) -> Result<Self, ConnectionError> {
        let gateway = HttpGateway::new(&config);
        Self::with_gateway(config, gateway, SectionRowParser::default()).await
    }
}

impl<G, P> AccessPointScanner<G, P>
where
    G: AccessPointGateway,
    P: ClientTableParser,
{
    /// Logs in and probes interface 0 once before handing out the scanner.
    pub async fn with_gateway(
        config: ScannerConfig,
        gateway: G,
        parser: P,
    ) -> Result<Self, ConnectionError> {
        config.validate()?;
        if !config.verify_tls {
            debug!("Certificate verification disabled for {}", config.host);
        }

        let session = gateway
            .login(&config.username, &config.password)
            .await
            .map_err(|err| ConnectionError::from_login(&config.host, err))?;

        let probe = gateway
            .fetch_status(&session, 0)
            .await
            .map_err(|source| ConnectionError::Unreachable {
                host: config.host.clone(),
                source,
            })?;

        if !probe.is_ok() {
            return Err(ConnectionError::ProbeFailed {
                host: config.host.clone(),
                status: probe.status,
            });
        }

        Ok(Self {
            config,
            gateway,
            parser,
            last_results: Vec::new(),
        })
    }

    /// Rescans the access point and returns the clients found.
    pub async fn scan(&mut self) -> &[DeviceRecord] {
        self.update_info().await;
        &self.last_results
    }

    /// Result of the most recent scan, without contacting the access point.
    pub fn last_results(&self) -> &[DeviceRecord] {
        &self.last_results
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    async fn update_info(&mut self) {
        info!("Checking access point at {}", self.config.host);

        self.last_results.clear();
        match self.collect_clients().await {
            Ok(devices) => self.last_results = devices,
            Err(err) => warn!(
                "Scan of {} aborted: {:#}",
                self.config.host,
                anyhow::Error::new(err)
            ),
        }
    }

    async fn collect_clients(&self) -> Result<Vec<DeviceRecord>, GatewayError> {
        let session = self
            .gateway
            .login(&self.config.username, &self.config.password)
            .await?;

        let mut devices = Vec::new();
        for unit in 0..endpoint::INTERFACES {
            let page = self.gateway.fetch_status(&session, unit).await?;
            if !page.is_ok() {
                debug!("Interface {unit} status page answered with HTTP {}", page.status);
            }

            let found = self.parser.parse_client_rows(&page.body);
            debug!("Interface {unit}: {} clients", found.len());
            devices.extend(found);
        }

        Ok(devices)
    }
}

#[async_trait]
impl<G, P> DeviceScanner for AccessPointScanner<G, P>
where
    G: AccessPointGateway,
    P: ClientTableParser,
{
    async fn scan_devices(&mut self) -> Vec<DeviceRecord> {
        self.scan().await.to_vec()
    }

    /// The web interface lists no names, only identifiers.
    fn get_device_name(&self, _device: &DeviceRecord) -> Option<String> {
        None
    }
}

/// Builds a scanner, or logs why the access point is unusable and returns `None`.
pub async fn get_scanner(config: ScannerConfig) -> Option<AccessPointScanner> {
    match AccessPointScanner::connect(config).await {
        Ok(scanner) => Some(scanner),
        Err(err) => {
            error!("{:#}", anyhow::Error::new(err));
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
