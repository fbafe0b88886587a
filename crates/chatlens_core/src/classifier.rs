//! Protocol classifier: scan a run of plain lines for the agent's tool
//! markers and coalesce everything else into prose segments.
//!
//! Marker lines come from the backend tool layer, one per line:
//! - `[选择工具] 工具名` — tool chosen, not yet executed
//! - `[工具调用] 动作 目标` — tool invoked with a target
//! - `**执行结果**: 结果文本` — outcome of an invocation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::push_line;
use crate::segment::Segment;

static TOOL_SELECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[选择工具\]\s*(.+)$").unwrap());

/// The lazy action capture splits at the first whitespace gap, so an action
/// name containing spaces loses its tail to the target. Known grammar
/// limitation; callers get an `unknown` tool type for the truncated name.
static TOOL_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[工具调用\]\s*(.+?)\s+(.+)$").unwrap());

static TOOL_RESULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*执行结果\*\*:\s*(.+)$").unwrap());

/// Classify one pending-text block into text and tool-marker segments.
/// Markers are tried in fixed priority order; first match wins. Blank-only
/// input yields nothing.
pub fn classify_block(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prose = String::new();

    for line in text.split('\n') {
        if let Some(caps) = TOOL_SELECT.captures(line) {
            flush_prose(&mut prose, &mut segments);
            segments.push(Segment::tool_select(line, caps[1].trim()));
            continue;
        }
        if let Some(caps) = TOOL_CALL.captures(line) {
            flush_prose(&mut prose, &mut segments);
            segments.push(Segment::tool_call(line, &caps[1], &caps[2]));
            continue;
        }
        if let Some(caps) = TOOL_RESULT.captures(line) {
            flush_prose(&mut prose, &mut segments);
            segments.push(Segment::tool_result(&caps[1]));
            continue;
        }
        push_line(&mut prose, line);
    }

    flush_prose(&mut prose, &mut segments);
    segments
}

fn flush_prose(prose: &mut String, out: &mut Vec<Segment>) {
    let trimmed = prose.trim();
    if !trimmed.is_empty() {
        out.push(Segment::text(trimmed));
    }
    prose.clear();
}
