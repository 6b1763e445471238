mod commands;
mod terminal;

use std::time::Duration;

use apwatch_common::config::Config;
use commands::{check, scan, watch, CommandLine, Commands};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    let scanner_cfg = commands.connection.to_scanner_config();

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Check => {
            print::header("checking access point", cfg.quiet);
            check::check(scanner_cfg, &cfg).await
        }
        Commands::Scan => {
            print::header("getting ready for scan", cfg.quiet);
            scan::scan(scanner_cfg, &cfg).await
        }
        Commands::Watch { interval } => {
            print::header("starting presence watch", cfg.quiet);
            watch::watch(scanner_cfg, Duration::from_secs(interval.max(1)), &cfg).await
        }
    }
}
