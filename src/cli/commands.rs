use clap::{Args, Parser, Subcommand, ValueEnum};
use crate::config::DEFAULT_CONFIG_PATH;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(name = "goalie", version, long_version = LONG_VERSION, about = "Watch crash groups and announce threshold crossings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll crash groups once and notify on changes
    Run(RunArgs),
    /// Validate a configuration file
    Validate(ConfigArgs),
    /// Show crash groups currently tracked above a threshold
    Cache(CacheArgs),
}

#[derive(Args, Clone)]
pub struct ConfigArgs {
    /// YAML settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

#[derive(Args, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Log notifications instead of sending them, and keep the cache file unchanged
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Clone)]
pub struct CacheArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
