mod cli;
mod commands;
mod display;
mod repl;

use anyhow::Context;
use clap::Parser;
use pregoeiro_core::{Clock, FixedClock, SystemClock, TenderConfig};

use crate::cli::{Cli, Commands};
use crate::commands::Cockpit;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    tracing::debug!("pregoeiro v{}", env!("CARGO_PKG_VERSION"));

    let config = TenderConfig::load_or_default(cli.config.as_deref())
        .context("loading tender config")?;
    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    let mut cockpit = Cockpit::new(config, clock, cli.json);

    match cli.command {
        Commands::Info => cockpit.info(),
        Commands::Eligibility(args) => cockpit.eligibility(&args),
        Commands::Deadline(args) => cockpit.deadline(&args),
        Commands::Announce(args) => cockpit.announce(&args),
        Commands::Scenarios => cockpit.scenarios(),
        Commands::Session => {
            let stdin = std::io::stdin();
            repl::run_session(&mut cockpit, stdin.lock())
        }
    }
}
