//! Orderlens CLI - date-filtered sales, customer and RFM views over an orders export

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{categories, geo, info, orders, payments, rfm, summary};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Info(args) => info::execute(args, &cli.global),
        cli::Commands::Summary(args) => summary::execute(args, &cli.global),
        cli::Commands::Orders(args) => orders::execute(args, &cli.global),
        cli::Commands::Categories(args) => categories::execute(args, &cli.global),
        cli::Commands::Payments(args) => payments::execute(args, &cli.global),
        cli::Commands::Geo(args) => geo::execute(args, &cli.global),
        cli::Commands::Rfm(args) => rfm::execute(args, &cli.global),
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
