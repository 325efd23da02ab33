use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linediff", about = "Line-granular diff with context-trimmed chunks")]
pub struct CliArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "LINEDIFF_LOG_LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the diff of two files
    Diff(DiffArgs),
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// File on the left side of the diff
    pub left_file: PathBuf,

    /// File on the right side of the diff
    pub right_file: PathBuf,

    /// Print chunks interleaved instead of side by side
    #[arg(long)]
    pub interleaved: bool,

    /// How far a search node may lag behind the frontier before it is
    /// pruned; larger values explore more and diff closer to minimal
    #[arg(long, default_value = "1000")]
    pub agg: usize,

    /// Unchanged lines shown around each changed region
    #[arg(long, default_value = "3", env = "LINEDIFF_CONTEXT_LINES")]
    pub context: usize,

    /// Column width for side-by-side output
    #[arg(long, default_value = "50", env = "LINEDIFF_COLUMN_WIDTH")]
    pub width: usize,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Treat a missing file as empty instead of failing
    #[arg(long)]
    pub missing_as_empty: bool,

    /// Emit chunks as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,
}
