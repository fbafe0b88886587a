//! `chatlens parse` — segment a transcript and print it.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::output;

pub fn run(file: Option<&Path>, summary: bool) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let segments = chatlens_core::parse(&text);
    tracing::debug!(count = segments.len(), "parsed transcript");

    if summary {
        output::segment_table(&segments);
    } else {
        output::segments(&segments);
    }
    Ok(())
}
