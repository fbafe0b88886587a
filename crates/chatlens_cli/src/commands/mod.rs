//! Command handlers.

mod parse;
mod replay;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse { file, summary } => parse::run(file.as_deref(), summary),
        Command::Replay { file } => replay::run(&file),
    }
}
