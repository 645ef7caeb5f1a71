//! CLI parse: clap types for shotmatch. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shotmatch CLI - reconcile location and frame listings into work ranges
#[derive(Parser)]
#[command(name = "shotmatch")]
#[command(about = "Match location references to shot frames and emit padded, timecoded ranges")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load both listings, replacing previously imported records
    Import {
        /// Location listing (one path per line)
        #[arg(long)]
        xytech: PathBuf,
        /// Frame listing (path followed by frame numbers)
        #[arg(long)]
        baselight: PathBuf,
    },
    /// Run the matching pass and store the processed entries
    Process {
        /// Skip thumbnail extraction
        #[arg(long)]
        no_thumbnails: bool,
        /// Reference video for thumbnails (overrides config)
        #[arg(long)]
        video: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write stored entries to a CSV report
    Export {
        /// Report path (default: timestamped name in the report directory)
        file: Option<PathBuf>,
    },
    /// Print stored processed entries
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
