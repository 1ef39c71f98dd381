use clap::{Parser, Subcommand, ValueEnum};
use strum::Display;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  /// Origin of the listings API, overriding the config file and environment
  #[arg(long, value_name = "URL")]
  pub base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, value_name = "SECONDS")]
  pub timeout_secs: Option<u64>,

  /// How to print loaded listings
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
  pub format: OutputFormat,

  #[command(subcommand)]
  pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
  /// Load the listings collection once and print it
  #[default]
  List,
  /// Check that the listings API is reachable
  Health,
}

#[derive(ValueEnum, Display, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Json,
  Table,
}
