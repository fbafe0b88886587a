//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect streamed AI coding-agent transcripts as typed segments
#[derive(Parser)]
#[command(name = "chatlens", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (tracing to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a transcript into segments
    Parse {
        /// Transcript file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print a summary table instead of rendered segments
        #[arg(long)]
        summary: bool,
    },
    /// Replay captured SSE events (JSON lines) through the accumulator
    Replay {
        /// File of {"event": ..., "data": ...} records, one per line
        file: PathBuf,
    },
}
