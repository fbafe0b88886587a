//! Line scanner: split a message into fenced code blocks and runs of plain
//! lines. One forward pass; unterminated fences keep whatever accumulated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fence opener: optional leading prose, then 3+ backticks or tildes, then
/// the language tag. Matches a fence anywhere in the line; prose before the
/// fence stays part of the preceding text run.
static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*(`{3,}|~{3,})(.*)$").unwrap());

/// Fence closer: a fence alone on its trimmed line.
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(`{3,}|~{3,})\s*$").unwrap());

/// A raw block from the scanner, before protocol classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlock {
    /// Run of plain lines, still to be classified for tool markers.
    Text(String),
    /// Fenced code block body, delimiters stripped.
    Code { language: String, body: String },
}

/// Split `message` into raw blocks, in source order.
pub fn scan(message: &str) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut text_buf = String::new();
    let mut code_buf = String::new();
    let mut fence_lang = String::new();
    let mut in_code = false;

    for line in message.split('\n') {
        if !in_code {
            if let Some(caps) = FENCE_OPEN.captures(line) {
                let prefix = caps.get(1).map_or("", |m| m.as_str());
                if !prefix.trim().is_empty() {
                    push_line(&mut text_buf, prefix);
                }
                flush_text(&mut text_buf, &mut blocks);
                fence_lang = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();
                code_buf.clear();
                in_code = true;
                continue;
            }
            push_line(&mut text_buf, line);
            continue;
        }

        if FENCE_CLOSE.is_match(line.trim()) {
            blocks.push(take_code(&mut code_buf, &mut fence_lang));
            in_code = false;
            continue;
        }
        push_line(&mut code_buf, line);
    }

    flush_text(&mut text_buf, &mut blocks);
    // Stream cut off mid-block: keep the partial code.
    if in_code && !code_buf.is_empty() {
        blocks.push(take_code(&mut code_buf, &mut fence_lang));
    }
    blocks
}

/// Join a line onto a buffer. An empty buffer takes the line as-is, so runs
/// of leading blank lines collapse.
pub(crate) fn push_line(buf: &mut String, line: &str) {
    if buf.is_empty() {
        buf.push_str(line);
    } else {
        buf.push('\n');
        buf.push_str(line);
    }
}

fn flush_text(buf: &mut String, out: &mut Vec<RawBlock>) {
    if buf.trim().is_empty() {
        buf.clear();
    } else {
        out.push(RawBlock::Text(std::mem::take(buf)));
    }
}

fn take_code(code_buf: &mut String, fence_lang: &mut String) -> RawBlock {
    let language = if fence_lang.is_empty() {
        "plaintext".to_string()
    } else {
        std::mem::take(fence_lang)
    };
    RawBlock::Code {
        language,
        body: std::mem::take(code_buf),
    }
}
