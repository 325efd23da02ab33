mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use linediff_engine::{diff_files, Action, Options};

use crate::config::{CliArgs, Command, DiffArgs};
use crate::render::ColorMode;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Logging goes to stderr; stdout carries the rendered diff.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    match args.command {
        Command::Diff(diff_args) => run_diff(&diff_args),
    }
}

fn run_diff(args: &DiffArgs) -> Result<()> {
    let options = Options {
        treat_missing_files_as_empty: args.missing_as_empty,
        context_lines: args.context,
        agg: Some(args.agg),
    };
    let chunks = diff_files(&args.left_file, &args.right_file, &options)?;

    if args.json {
        let stdout = std::io::stdout().lock();
        serde_json::to_writer(stdout, &chunks)?;
        println!();
        return Ok(());
    }

    let diff_size = chunks
        .iter()
        .flat_map(|c| &c.lines)
        .filter(|l| l.action != Action::Equal)
        .count();
    if diff_size > 0 {
        println!("Diff size: {diff_size}");
    }

    let mode = if args.no_color {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    };
    if args.interleaved {
        render::print_interleaved(&chunks, mode);
    } else {
        render::print_side_by_side(&chunks, args.width, mode);
    }
    Ok(())
}
