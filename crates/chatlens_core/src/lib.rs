//! chatlens-core — segmenter for streamed AI coding-agent messages.
//!
//! Turns one accumulated message buffer into an ordered list of typed
//! segments: prose, fenced code, and the agent's tool protocol markers
//! (select / call / result). Three stages run in sequence:
//!
//! 1. [scanner] splits lines into code blocks and plain-text runs,
//! 2. [classifier] finds tool markers inside each text run,
//! 3. [filter] drops tool-selects already superseded by a completed call.
//!
//! [parse] is total: any input, including empty, truncated, or garbage
//! text, yields a valid (possibly empty) segment list. Malformed markers
//! degrade to plain text. The call is pure and holds no state, so the
//! streaming side can simply re-parse its buffer on every increment.

pub mod classifier;
pub mod filter;
pub mod lookup;
pub mod scanner;
pub mod segment;

pub use lookup::{language_display_name, tool_icon};
pub use segment::{ResultStatus, Segment, ToolType};

/// Parse one message into segments, in source order.
pub fn parse(message: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for block in scanner::scan(message) {
        match block {
            scanner::RawBlock::Text(text) => {
                segments.extend(classifier::classify_block(&text));
            }
            scanner::RawBlock::Code { language, body } => {
                segments.push(Segment::code(body, language));
            }
        }
    }
    filter::drop_superseded_selects(segments)
}
