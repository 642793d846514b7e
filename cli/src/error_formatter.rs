use ariadne::{Color, Label, Report, ReportKind, Source};
use texttools::json::JsonSyntaxError;
use texttools::ToolError;

/// Format a JSON syntax error with fancy terminal output using Ariadne
pub fn format_json_error(source: &str, error: &JsonSyntaxError) -> String {
    let source_id = "<input>".to_string();
    let start = error.char_offset(source);
    let end = (start + 1).min(source.chars().count()).max(start);

    let message = format!(
        "Invalid JSON: {} (line {}, column {})",
        error.reason(),
        error.line,
        error.column
    );

    let report = Report::build(ReportKind::Error, &source_id, start)
        .with_message(message)
        .with_label(
            Label::new((&source_id, start..end))
                .with_message(error.category.as_str())
                .with_color(Color::Red),
        )
        .finish();

    let mut output = Vec::new();
    match report.write((&source_id, Source::from(source)), &mut output) {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Invalid JSON: {}", error)
        }
    }
}

pub fn format_error(error: &ToolError) -> String {
    match error {
        ToolError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        ToolError::UnknownTool(name) => format!(
            "Unknown tool: {}\n  Available: {}",
            name,
            texttools::ToolKind::ALL
                .iter()
                .map(|k| k.operation())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        other => format!("Error: {}", other),
    }
}
