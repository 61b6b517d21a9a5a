//! Response body preview: pretty JSON when possible, raw text otherwise.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_lines: usize,
    pub indent: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_lines: 15,
            indent: 2,
        }
    }
}

/// Formats a response body for display, truncated to `max_lines`.
pub fn format_json(text: Option<&str>, options: PreviewOptions) -> String {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return "(empty response)".to_string(),
    };

    let formatted = pretty(text, options.indent).unwrap_or_else(|| text.to_string());
    let lines: Vec<&str> = formatted.split('\n').collect();
    if lines.len() <= options.max_lines {
        return formatted;
    }
    let remaining = lines.len() - options.max_lines;
    format!("{}\n... ({remaining} more lines)", lines[..options.max_lines].join("\n"))
}

fn pretty(text: &str, indent: usize) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).ok()?;
    String::from_utf8(buf).ok()
}
