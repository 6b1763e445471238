pub mod check;
pub mod scan;
pub mod watch;

use anyhow::Context;
use apwatch_common::config::ScannerConfig;
use apwatch_core::AccessPointScanner;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Instrument;

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "apwatch")]
#[command(about = "Lists the clients connected to a Linksys access point.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Reduce output (-q drops headers, -qq prints bare identifiers)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// Address of the access point, optionally with port
    #[arg(long, env = "APWATCH_HOST")]
    pub host: String,

    /// Administrator login name
    #[arg(short, long, env = "APWATCH_USERNAME")]
    pub username: String,

    /// Administrator password
    #[arg(short, long, env = "APWATCH_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Accept self-signed or otherwise invalid certificates
    #[arg(long, global = true)]
    pub insecure: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that the access point is reachable and accepts the credentials
    #[command(alias = "c")]
    Check,
    /// List the currently connected clients once
    #[command(alias = "s")]
    Scan,
    /// Poll the access point and report clients joining and leaving
    #[command(alias = "w")]
    Watch {
        /// Seconds between two scans
        #[arg(short, long, default_value_t = 12)]
        interval: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ConnectionArgs {
    pub fn to_scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new(&self.host, &self.username, &self.password)
            .with_verify_tls(!self.insecure)
    }
}

/// Logs in and probes the access point behind a spinner.
pub async fn connect(config: ScannerConfig) -> anyhow::Result<AccessPointScanner> {
    let host = config.host.clone();
    AccessPointScanner::connect(config)
        .instrument(spinner::spinner_span(&format!("Logging in to {host}...")))
        .await
        .with_context(|| format!("access point at {host} is unavailable"))
}
