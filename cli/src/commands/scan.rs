use std::time::{Duration, Instant};

use apwatch_common::config::{Config, ScannerConfig};
use apwatch_common::network::device::DeviceRecord;
use apwatch_core::endpoint::INTERFACES;
use colored::*;
use tracing::{info, Instrument};

use crate::commands;
use crate::terminal::{colors, print, spinner};

pub async fn scan(config: ScannerConfig, cfg: &Config) -> anyhow::Result<()> {
    let mut scanner = commands::connect(config).await?;

    let start_time: Instant = Instant::now();
    let devices: Vec<DeviceRecord> = scanner
        .scan()
        .instrument(spinner::spinner_span("Reading client tables..."))
        .await
        .to_vec();

    scan_ends(&devices, start_time.elapsed(), cfg);
    Ok(())
}

fn scan_ends(devices: &[DeviceRecord], total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        devices.iter().for_each(|device| print::print(device.as_str()));
        return;
    }

    if devices.is_empty() {
        print::header("zero clients detected", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("connected clients", cfg.quiet);
    for (idx, device) in devices.iter().enumerate() {
        print::tree_head(idx, device);
    }
    print_summary(devices.len(), total_time, cfg);
}

fn print_summary(devices_len: usize, total_time: Duration, cfg: &Config) {
    let active: ColoredString = format!("{devices_len} clients").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "Scan Complete: {active} on {INTERFACES} interfaces in {total_time}"
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => info!("{}", output),
    }
}
