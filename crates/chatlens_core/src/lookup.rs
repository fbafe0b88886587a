//! Display lookups for the rendering side: language names, tool icons,
//! result status icons and color tokens. Pure functions over fixed tables.

use crate::segment::ResultStatus;

/// Human-readable name for a fence language tag. Unknown tags fall back to
/// the tag uppercased.
pub fn language_display_name(lang: &str) -> String {
    let name = match lang.to_lowercase().as_str() {
        "js" | "javascript" => "JavaScript",
        "ts" | "typescript" => "TypeScript",
        "vue" => "Vue",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "less" => "Less",
        "json" => "JSON",
        "xml" => "XML",
        "yaml" | "yml" => "YAML",
        "md" | "markdown" => "Markdown",
        "python" | "py" => "Python",
        "java" => "Java",
        "go" => "Go",
        "rust" => "Rust",
        "c" => "C",
        "cpp" => "C++",
        "csharp" | "cs" => "C#",
        "php" => "PHP",
        "ruby" => "Ruby",
        "swift" => "Swift",
        "kotlin" => "Kotlin",
        "sql" => "SQL",
        "shell" | "sh" => "Shell",
        "bash" => "Bash",
        "powershell" => "PowerShell",
        "dockerfile" => "Dockerfile",
        "plaintext" | "text" => "纯文本",
        _ => return lang.to_uppercase(),
    };
    name.to_string()
}

/// Icon table for tool actions. Fuzzy match: the first key contained in the
/// action wins, so table order is load-bearing (e.g. 搜索 sits above 搜索图片
/// and shadows it for any action containing 搜索). Keep the declared order.
const TOOL_ICONS: &[(&str, &str)] = &[
    ("写入文件", "📝"),
    ("读取文件", "📖"),
    ("读取目录", "📁"),
    ("修改文件", "✏️"),
    ("删除文件", "🗑️"),
    ("执行命令", "⚡"),
    ("搜索", "🔍"),
    ("搜索图片", "🖼️"),
    ("获取插画", "🎨"),
    ("生成Logo", "🏷️"),
];

/// Icon for a tool action; generic wrench when nothing matches.
pub fn tool_icon(action: &str) -> &'static str {
    TOOL_ICONS
        .iter()
        .find(|(key, _)| action.contains(key))
        .map(|(_, icon)| *icon)
        .unwrap_or("🔧")
}

impl ResultStatus {
    pub fn icon(self) -> &'static str {
        match self {
            ResultStatus::Success => "✅",
            ResultStatus::Warning => "⚠️",
            ResultStatus::Error => "❌",
        }
    }

    /// Renderer-agnostic color token for the status.
    pub fn color(self) -> &'static str {
        match self {
            ResultStatus::Success => "green",
            ResultStatus::Warning => "yellow",
            ResultStatus::Error => "red",
        }
    }
}
