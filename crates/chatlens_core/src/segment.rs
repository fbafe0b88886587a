use serde::{Deserialize, Serialize};

/// Tool behind a protocol action name (e.g. "写入文件" -> WriteFile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    ReadFile,
    ReadDir,
    ModifyFile,
    WriteFile,
    DeleteFile,
    SearchImages,
    GetIllustration,
    GenerateLogo,
    Unknown,
}

impl ToolType {
    /// Map a protocol action name to its tool type. Unrecognized names are
    /// kept as [ToolType::Unknown] and still render as ordinary tool segments.
    pub fn from_action(action: &str) -> Self {
        match action {
            "读取文件" => ToolType::ReadFile,
            "读取目录" => ToolType::ReadDir,
            "修改文件" => ToolType::ModifyFile,
            "写入文件" => ToolType::WriteFile,
            "删除文件" => ToolType::DeleteFile,
            "搜索图片" => ToolType::SearchImages,
            "获取插画" => ToolType::GetIllustration,
            "生成Logo" => ToolType::GenerateLogo,
            _ => ToolType::Unknown,
        }
    }

    /// Read-class tools; the UI does not show a result block for these.
    pub fn is_read(self) -> bool {
        matches!(self, ToolType::ReadFile | ToolType::ReadDir)
    }
}

/// Outcome of a tool invocation, derived from the result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Success,
    Warning,
    Error,
}

impl ResultStatus {
    /// Classify a result line by keyword, in strict priority order: a success
    /// keyword beats a warning keyword, which beats an error keyword. Text
    /// with no keyword is labeled success (product behavior, keep as-is).
    pub fn from_result(result: &str) -> Self {
        if result.contains("成功") {
            ResultStatus::Success
        } else if result.contains("警告") || result.contains("未找到") {
            ResultStatus::Warning
        } else if result.contains("错误") || result.contains("失败") {
            ResultStatus::Error
        } else {
            ResultStatus::Success
        }
    }
}

/// One classified span of a parsed message, in source order.
///
/// `content` is the normalized text: code bodies exclude the fence lines,
/// prose is trimmed, tool-result carries the text after the marker, and the
/// tool markers keep their full line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Segment {
    Text {
        content: String,
    },
    ToolSelect {
        content: String,
        tool_action: String,
        tool_type: ToolType,
    },
    ToolCall {
        content: String,
        tool_action: String,
        tool_target: String,
        tool_type: ToolType,
    },
    ToolResult {
        content: String,
        result_status: ResultStatus,
    },
    Code {
        content: String,
        language: String,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    /// `line` is the full marker line; `action` the trimmed action capture.
    pub fn tool_select(line: impl Into<String>, action: impl Into<String>) -> Self {
        let action = action.into();
        let tool_type = ToolType::from_action(&action);
        Segment::ToolSelect {
            content: line.into(),
            tool_action: action,
            tool_type,
        }
    }

    pub fn tool_call(
        line: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let action = action.into();
        let tool_type = ToolType::from_action(&action);
        Segment::ToolCall {
            content: line.into(),
            tool_action: action,
            tool_target: target.into(),
            tool_type,
        }
    }

    pub fn tool_result(result: impl Into<String>) -> Self {
        let result = result.into();
        let result_status = ResultStatus::from_result(&result);
        Segment::ToolResult {
            content: result,
            result_status,
        }
    }

    pub fn code(body: impl Into<String>, language: impl Into<String>) -> Self {
        Segment::Code {
            content: body.into(),
            language: language.into(),
        }
    }

    /// Normalized text of this segment.
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content }
            | Segment::ToolSelect { content, .. }
            | Segment::ToolCall { content, .. }
            | Segment::ToolResult { content, .. }
            | Segment::Code { content, .. } => content,
        }
    }

    /// Action name for tool-select/tool-call segments.
    pub fn tool_action(&self) -> Option<&str> {
        match self {
            Segment::ToolSelect { tool_action, .. } | Segment::ToolCall { tool_action, .. } => {
                Some(tool_action)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_type_from_known_action() {
        assert_eq!(ToolType::from_action("写入文件"), ToolType::WriteFile);
        assert_eq!(ToolType::from_action("读取目录"), ToolType::ReadDir);
        assert_eq!(ToolType::from_action("生成Logo"), ToolType::GenerateLogo);
    }

    #[test]
    fn tool_type_from_unknown_action() {
        assert_eq!(ToolType::from_action("部署应用"), ToolType::Unknown);
        assert_eq!(ToolType::from_action(""), ToolType::Unknown);
    }

    #[test]
    fn read_tools_are_read_class() {
        assert!(ToolType::ReadFile.is_read());
        assert!(ToolType::ReadDir.is_read());
        assert!(!ToolType::WriteFile.is_read());
        assert!(!ToolType::Unknown.is_read());
    }

    #[test]
    fn result_status_keywords() {
        assert_eq!(ResultStatus::from_result("操作成功"), ResultStatus::Success);
        assert_eq!(ResultStatus::from_result("警告: 覆盖旧文件"), ResultStatus::Warning);
        assert_eq!(ResultStatus::from_result("未找到文件"), ResultStatus::Warning);
        assert_eq!(ResultStatus::from_result("发生错误"), ResultStatus::Error);
        assert_eq!(ResultStatus::from_result("写入失败"), ResultStatus::Error);
    }

    #[test]
    fn result_status_success_beats_failure_keyword() {
        // Priority order: the success keyword wins even when an error keyword
        // is present in the same line.
        assert_eq!(
            ResultStatus::from_result("重试成功（首次失败）"),
            ResultStatus::Success
        );
    }

    #[test]
    fn result_status_defaults_to_success() {
        assert_eq!(ResultStatus::from_result("done"), ResultStatus::Success);
    }

    #[test]
    fn segment_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Segment::tool_call(
            "[工具调用] 写入文件 a.txt",
            "写入文件",
            "a.txt",
        ))
        .unwrap();
        assert!(json.contains(r#""kind":"tool-call"#));
        assert!(json.contains(r#""tool_type":"write_file"#));
    }

    #[test]
    fn tool_select_derives_type_from_action() {
        let seg = Segment::tool_select("[选择工具] 删除文件", "删除文件");
        assert!(matches!(
            seg,
            Segment::ToolSelect {
                tool_type: ToolType::DeleteFile,
                ..
            }
        ));
    }
}
