//! Terminal output helpers — dual-mode: styled text for humans, structured
//! JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for the segment summary table

use std::sync::atomic::{AtomicBool, Ordering};

use chatlens_core::{language_display_name, tool_icon, ResultStatus, Segment};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use console::{style, Style};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn error(text: &str) {
    if is_json() {
        emit_json("error", text, None);
    } else {
        eprintln!("{} {}", style("error:").red().bold(), text);
    }
}

/// Print segments: JSON mode emits the serialized list, text mode renders
/// each kind with its icon and color.
pub fn segments(segments: &[Segment]) {
    if is_json() {
        let json = serde_json::to_value(segments).unwrap_or(JsonValue::Null);
        emit_json("segments", "parsed segments", Some(&json));
        return;
    }
    for segment in segments {
        match segment {
            Segment::Text { content } => println!("{content}\n"),
            Segment::Code { content, language } => {
                println!(
                    "{}",
                    style(format!("── {} ──", language_display_name(language)))
                        .cyan()
                        .bold()
                );
                println!("{}\n", style(content).dim());
            }
            Segment::ToolSelect {
                tool_action: action,
                ..
            } => {
                println!("{} {}\n", tool_icon(action), style(action).yellow());
            }
            Segment::ToolCall {
                tool_action: action,
                tool_target: target,
                ..
            } => {
                println!(
                    "{} {} {}\n",
                    tool_icon(action),
                    style(action).green().bold(),
                    style(target).dim()
                );
            }
            Segment::ToolResult {
                content,
                result_status,
            } => {
                println!(
                    "{} {}\n",
                    result_status.icon(),
                    status_style(*result_status).apply_to(content)
                );
            }
        }
    }
}

/// Summary table: one row per segment with kind, detail, and size.
pub fn segment_table(segments: &[Segment]) {
    if is_json() {
        self::segments(segments);
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "kind", "detail", "chars"]);
    for (i, segment) in segments.iter().enumerate() {
        let (kind, detail) = match segment {
            Segment::Text { .. } => ("text", String::new()),
            Segment::Code { language, .. } => ("code", language_display_name(language)),
            Segment::ToolSelect { tool_action, .. } => ("tool-select", tool_action.clone()),
            Segment::ToolCall {
                tool_action,
                tool_target,
                ..
            } => ("tool-call", format!("{tool_action} {tool_target}")),
            Segment::ToolResult { result_status, .. } => ("tool-result", result_status.icon().to_string()),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(kind),
            Cell::new(detail),
            Cell::new(segment.content().chars().count()),
        ]);
    }
    println!("{table}");
}

pub fn replay_stats(events: usize, chars: usize, completed: bool) {
    if is_json() {
        let data = serde_json::json!({
            "events": events,
            "chars": chars,
            "completed": completed,
        });
        emit_json("stats", "replay finished", Some(&data));
        return;
    }
    let state = if completed { "completed" } else { "truncated" };
    println!(
        "{} {events} events, {chars} chars, {state}\n",
        style("replay:").bold().cyan()
    );
}

/// Map the core color token onto a console style. Unmatched tokens render
/// unstyled.
fn status_style(status: ResultStatus) -> Style {
    match status.color() {
        "green" => Style::new().green(),
        "yellow" => Style::new().yellow(),
        "red" => Style::new().red(),
        _ => Style::new(),
    }
}
