pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "timekit")]
#[command(about = "Duration, timestamp and identifier helpers for time-series connectors")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a lookback duration such as 15m, 2h, 3d or 1w in seconds
    Duration { text: String },

    /// Format an instant as YYYY-MM-DDTHH:MM:SSZ
    Format {
        /// Seconds since the Unix epoch; defaults to now
        #[arg(long, allow_hyphen_values = true)]
        epoch: Option<i64>,
    },

    /// Parse a YYYY-MM-DDTHH:MM:SSZ timestamp into epoch seconds
    Parse { text: String },

    /// Generate random identifiers
    Uuid {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Build query window bounds from a lookback
    Window {
        /// Lookback duration; overrides the config file
        #[arg(short, long)]
        lookback: Option<String>,

        /// Window end; overrides the config file, defaults to now
        #[arg(short, long)]
        stop: Option<String>,

        /// TOML file with a [window] table
        #[arg(short, long)]
        config: Option<String>,

        /// Print the window as JSON instead of a flux range
        #[arg(long)]
        json: bool,
    },
}
