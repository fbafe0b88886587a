//! `chatlens replay` — drive the accumulator with captured SSE events.

use std::path::Path;

use anyhow::{Context, Result};
use chatlens_stream::{MessageStream, StreamEvent};
use serde::Deserialize;

use crate::output;

/// One captured SSE event, as written by `curl -N` post-processing or the
/// browser devtools export: `{"event": "message", "data": "..."}`.
#[derive(Deserialize)]
struct CapturedEvent {
    #[serde(default)]
    event: String,
    data: String,
}

pub fn run(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let mut stream = MessageStream::new();
    let mut events = 0usize;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let captured: CapturedEvent =
            serde_json::from_str(line).with_context(|| format!("bad capture line: {line}"))?;
        stream.apply(StreamEvent::from_sse(&captured.event, &captured.data)?);
        events += 1;
    }

    if let Some(err) = stream.business_error() {
        output::error(&format!("stream aborted: {} (code {})", err.message, err.code));
    }
    output::replay_stats(events, stream.content().len(), stream.is_completed());
    output::segments(&stream.segments());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_event_event_field_defaults_empty() {
        let captured: CapturedEvent = serde_json::from_str(r#"{"data": "{\"d\": \"x\"}"}"#).unwrap();
        assert_eq!(captured.event, "");
        assert_eq!(captured.data, r#"{"d": "x"}"#);
    }
}
