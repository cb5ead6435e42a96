//! Command-line argument parsing for keyline.

use clap::Parser;
use std::path::PathBuf;

/// Output format for parsed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Command followed by double-quoted arguments.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid output format: {s}. Expected: text or json"
            )),
        }
    }
}

/// Splits Redis-style command lines into a command and its arguments.
#[derive(Parser, Debug)]
#[command(name = "keyline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Parse a single line and exit instead of reading stdin
    #[arg(short = 'e', long, value_name = "LINE")]
    pub eval: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "KEYLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Ignore the bundled command list
    #[arg(long)]
    pub no_builtin: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
