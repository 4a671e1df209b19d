use super::app_config::{Locale, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cityguide",
    version,
    about = "Browse a city's places by category in the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file (TOML) to load instead of the built-in places.
    #[arg(long, value_name = "PATH", env = "CITYGUIDE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Interface language.
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Show the key hint footer.
    #[arg(long)]
    pub show_key_hints: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
