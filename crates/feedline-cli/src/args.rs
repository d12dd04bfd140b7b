use crate::types::{LogLevel, OutputFormat};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use feedline_types::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedline")]
#[command(about = "Read, comment on and applaud a social feed from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <data-dir>/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (defaults to $FEEDLINE_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Posts file (.json or .toml); overrides the config
    #[arg(long, global = true)]
    pub posts: Option<PathBuf>,

    /// Display locale; overrides the config
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive feed (default)
    Tui,

    /// Print the feed once
    Render {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Clock used for relative timestamps (RFC 3339)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// One line per post
        #[arg(long)]
        compact: bool,
    },

    /// Write a default config.toml into the data directory
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the loaded post records as JSON
    Posts,
}
