//! Escrow daemon: runs the DGS escrow contract over a batch of triggers.

mod catalog;
mod config;
mod replay;

use anyhow::Context;
use clap::Parser;
use escrow_contract::{ContractRunner, EscrowContract};
use escrow_host::{EpochClock, SystemEpochClock};
use escrow_types::{AccountId, BlockHeight, EpochTime};
use escrow_utils::{init_logging, LogFormat};
use std::path::PathBuf;

use crate::catalog::StaticCatalog;
use crate::config::DaemonConfig;

#[derive(Parser)]
#[command(name = "escrow-daemon", about = "DGS escrow contract runner")]
struct Cli {
    /// Account operating the contract (decimal id). Overrides the config file.
    #[arg(long, env = "ESCROW_ACCOUNT")]
    account: Option<AccountId>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ESCROW_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ESCROW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "ESCROW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Replay trigger transactions and print one outbound descriptor per line.
    Replay {
        /// JSON array of `{"trigger": {...}, "params": {...}}` entries.
        #[arg(long)]
        triggers: PathBuf,

        /// TOML goods catalog.
        #[arg(long)]
        catalog: PathBuf,

        /// Current block height.
        #[arg(long)]
        height: u32,

        /// Current host epoch time in seconds; defaults to the wall clock.
        #[arg(long)]
        epoch_time: Option<u32>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

struct FixedClock(EpochTime);

impl EpochClock for FixedClock {
    fn now(&self) -> EpochTime {
        self.0
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => DaemonConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DaemonConfig::default(),
    };
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.account.is_some() {
        config.account = cli.account;
    }

    let format: LogFormat = config.log_format.parse()?;
    init_logging(format, &config.log_level);

    match cli.command {
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Replay {
            triggers,
            catalog,
            height,
            epoch_time,
        } => {
            let account = config
                .account
                .context("no contract account: pass --account or set `account` in the config")?;

            let catalog = StaticCatalog::from_toml_file(&catalog)
                .with_context(|| format!("failed to load catalog {}", catalog.display()))?;
            let text = std::fs::read_to_string(&triggers)
                .with_context(|| format!("failed to read {}", triggers.display()))?;
            let invocations = replay::parse_invocations(&text)
                .with_context(|| format!("failed to parse {}", triggers.display()))?;

            if catalog.is_empty() {
                tracing::warn!("Goods catalog is empty, every priced purchase will be refunded");
            }
            tracing::info!(
                "Running escrow contract as {} over {} trigger(s), {} good(s) listed",
                account,
                invocations.len(),
                catalog.len(),
            );

            let runner = ContractRunner::new(EscrowContract::new(config.contract), account);
            let height = BlockHeight::new(height);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match epoch_time {
                Some(secs) => replay::replay(
                    &runner,
                    &invocations,
                    height,
                    &catalog,
                    &FixedClock(EpochTime::new(secs)),
                    &mut out,
                )?,
                None => replay::replay(
                    &runner,
                    &invocations,
                    height,
                    &catalog,
                    &SystemEpochClock,
                    &mut out,
                )?,
            };

            tracing::info!("Replay finished: {}", runner.stats().summary());
        }
    }

    Ok(())
}
