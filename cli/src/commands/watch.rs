use std::collections::BTreeSet;
use std::time::Duration;

use apwatch_common::config::{Config, ScannerConfig};
use apwatch_common::network::device::DeviceRecord;
use tracing::{info, warn};

use crate::commands;
use crate::terminal::print;

/// Clients that joined or left between two consecutive scans.
#[derive(Debug, Default, PartialEq, Eq)]
struct PresenceChange {
    arrived: Vec<DeviceRecord>,
    departed: Vec<DeviceRecord>,
}

impl PresenceChange {
    fn between(previous: &BTreeSet<DeviceRecord>, current: &BTreeSet<DeviceRecord>) -> Self {
        Self {
            arrived: current.difference(previous).cloned().collect(),
            departed: previous.difference(current).cloned().collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.departed.is_empty()
    }
}

pub async fn watch(config: ScannerConfig, interval: Duration, cfg: &Config) -> anyhow::Result<()> {
    let mut scanner = commands::connect(config).await?;
    info!("Scanning every {}s, press Ctrl-C to stop", interval.as_secs());

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut present: BTreeSet<DeviceRecord> = BTreeSet::new();
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }

        let current: BTreeSet<DeviceRecord> = scanner.scan().await.iter().cloned().collect();
        if current.is_empty() {
            warn!("No clients reported, the access point may be unreachable");
        }

        report(&PresenceChange::between(&present, &current), current.len(), cfg);
        present = current;
    }

    info!("Watch stopped");
    Ok(())
}

fn report(change: &PresenceChange, present: usize, cfg: &Config) {
    for device in &change.arrived {
        info!("{device} arrived");
    }
    for device in &change.departed {
        warn!("{device} left");
    }
    if cfg.quiet == 0 && change.is_empty() {
        print::print_status(format!("{present} clients present, no change"));
    }
}
