mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "medals")]
#[command(about = "Olympic medal board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and medals.log [default: $MEDALS_PATH or the XDG data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// URL of the country collection [default: $MEDALS_API_URL or config api.base_url]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
