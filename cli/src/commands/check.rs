use apwatch_common::config::{Config, ScannerConfig};
use tracing::info;

use crate::commands;

pub async fn check(config: ScannerConfig, cfg: &Config) -> anyhow::Result<()> {
    let scanner = commands::connect(config).await?;
    let target = scanner.config();

    info!("Access point {} accepted the login of '{}'", target.host, target.username);
    if !target.verify_tls && cfg.quiet == 0 {
        info!("Certificate verification is disabled for this access point");
    }
    Ok(())
}
