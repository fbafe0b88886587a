//! Post-pass over the segment list: once a tool-call for an action exists,
//! the tool-select for that action is stale and is dropped.

use std::collections::HashSet;

use crate::segment::Segment;

/// Drop tool-select segments whose action also appears on a tool-call
/// anywhere in the list. Matching is position-independent: a call earlier or
/// later in the message both supersede the select. All other segments pass
/// through in order.
pub fn drop_superseded_selects(segments: Vec<Segment>) -> Vec<Segment> {
    let completed: HashSet<String> = segments
        .iter()
        .filter_map(|seg| match seg {
            Segment::ToolCall { tool_action, .. } => Some(tool_action.clone()),
            _ => None,
        })
        .collect();

    if completed.is_empty() {
        return segments;
    }

    segments
        .into_iter()
        .filter(|seg| match seg {
            Segment::ToolSelect { tool_action, .. } => !completed.contains(tool_action),
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_superseded_by_later_call() {
        let segments = vec![
            Segment::tool_select("[选择工具] 写入文件", "写入文件"),
            Segment::tool_call("[工具调用] 写入文件 a.txt", "写入文件", "a.txt"),
        ];
        let filtered = drop_superseded_selects(segments);
        assert_eq!(filtered.len(), 1);
        assert!(matches!(&filtered[0], Segment::ToolCall { .. }));
    }

    #[test]
    fn select_superseded_by_earlier_call() {
        // Position-independent by design: the call may precede the select.
        let segments = vec![
            Segment::tool_call("[工具调用] 写入文件 a.txt", "写入文件", "a.txt"),
            Segment::tool_select("[选择工具] 写入文件", "写入文件"),
        ];
        let filtered = drop_superseded_selects(segments);
        assert_eq!(filtered.len(), 1);
        assert!(matches!(&filtered[0], Segment::ToolCall { .. }));
    }

    #[test]
    fn unrelated_select_survives() {
        let segments = vec![
            Segment::tool_select("[选择工具] 删除文件", "删除文件"),
            Segment::tool_call("[工具调用] 写入文件 a.txt", "写入文件", "a.txt"),
        ];
        let filtered = drop_superseded_selects(segments);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn no_calls_is_a_passthrough() {
        let segments = vec![
            Segment::text("hello"),
            Segment::tool_select("[选择工具] 写入文件", "写入文件"),
        ];
        let filtered = drop_superseded_selects(segments.clone());
        assert_eq!(filtered, segments);
    }

    #[test]
    fn order_of_survivors_is_preserved() {
        let segments = vec![
            Segment::text("a"),
            Segment::tool_select("[选择工具] 修改文件", "修改文件"),
            Segment::text("b"),
            Segment::tool_call("[工具调用] 修改文件 x.rs", "修改文件", "x.rs"),
            Segment::text("c"),
        ];
        let filtered = drop_superseded_selects(segments);
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered[0], Segment::text("a"));
        assert_eq!(filtered[1], Segment::text("b"));
        assert!(matches!(&filtered[2], Segment::ToolCall { .. }));
        assert_eq!(filtered[3], Segment::text("c"));
    }
}
