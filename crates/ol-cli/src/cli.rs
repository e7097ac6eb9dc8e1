//! CLI argument definitions using clap derive API

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ol_rollup::{GeoLevel, Granularity, RfmRank};

/// Orderlens - date-filtered views over an e-commerce orders export
#[derive(Parser, Debug)]
#[command(name = "ol")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: ./orderlens.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Dataset CSV path (overrides OL_DATASET and the config file)
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// First purchase date to include (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Last purchase date to include (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    ol_core::parse_date(value).ok_or_else(|| format!("'{value}' is not a YYYY-MM-DD date"))
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dataset's size and purchase-date span
    Info(InfoArgs),

    /// Show every view for the selected date range
    Summary(SummaryArgs),

    /// Orders and revenue per day, month, or year
    Orders(OrdersArgs),

    /// Most (or least) popular product categories
    Categories(CategoriesArgs),

    /// Orders per payment type
    Payments(PaymentsArgs),

    /// Distinct customers per city or state
    Geo(GeoArgs),

    /// Best customers by recency, frequency, or monetary value
    Rfm(RfmArgs),
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Rows per ranked section (default: top_n from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the orders command
#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Period length
    #[arg(short, long, value_enum, default_value = "day")]
    pub period: PeriodArg,
}

/// Period lengths for the orders command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodArg {
    Day,
    Month,
    Year,
}

impl From<PeriodArg> for Granularity {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Day => Granularity::Day,
            PeriodArg::Month => Granularity::Month,
            PeriodArg::Year => Granularity::Year,
        }
    }
}

/// Arguments for the categories command
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Number of categories to show (default: top_n from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show the least popular categories instead
    #[arg(long)]
    pub bottom: bool,
}

/// Arguments for the payments command
#[derive(Args, Debug)]
pub struct PaymentsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the geo command
#[derive(Args, Debug)]
pub struct GeoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Location attribute to group by
    #[arg(short, long, value_enum, default_value = "state")]
    pub by: GeoArg,

    /// Number of regions to show (default: top_n from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Location attributes for the geo command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoArg {
    City,
    State,
}

impl From<GeoArg> for GeoLevel {
    fn from(arg: GeoArg) -> Self {
        match arg {
            GeoArg::City => GeoLevel::City,
            GeoArg::State => GeoLevel::State,
        }
    }
}

/// Arguments for the rfm command
#[derive(Args, Debug)]
pub struct RfmArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Number of customers to show (default: top_n from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// RFM dimension to rank customers by
    #[arg(short, long, value_enum, default_value = "recency")]
    pub rank: RankArg,
}

/// Ranking dimensions for the rfm command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankArg {
    Recency,
    Frequency,
    Monetary,
}

impl From<RankArg> for RfmRank {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::Recency => RfmRank::Recency,
            RankArg::Frequency => RfmRank::Frequency,
            RankArg::Monetary => RfmRank::Monetary,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
