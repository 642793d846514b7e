use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use std::path::Path;
use texttools::{ToolKind, ToolOutput, UsageRecord};

/// Longest input/output preview shown in the history table
const PREVIEW_CHARS: usize = 40;

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a successful tool output
    ///
    /// Raw output is the bare value followed by a newline.
    pub fn format_output(&self, kind: ToolKind, output: &ToolOutput, raw: bool) -> String {
        let value = output.value().unwrap_or_default();

        if raw {
            return format!("{}\n", value);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec![Cell::new(kind.label())]));
        table.add_row(Row::from(vec![Cell::new(value)]));

        format!("{}\n", table)
    }

    pub fn format_history(&self, path: &Path, records: &[UsageRecord]) -> String {
        if records.is_empty() {
            return format!("No usage recorded in {}\n", path.display());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("ID").set_alignment(CellAlignment::Right),
            Cell::new("Tool").set_alignment(CellAlignment::Left),
            Cell::new("Input").set_alignment(CellAlignment::Left),
            Cell::new("Output").set_alignment(CellAlignment::Left),
            Cell::new("Created").set_alignment(CellAlignment::Left),
        ]));

        for record in records {
            table.add_row(Row::from(vec![
                Cell::new(record.id).set_alignment(CellAlignment::Right),
                Cell::new(record.tool_type.label()),
                Cell::new(preview(&record.input_data)),
                Cell::new(preview(&output_summary(&record.output_data))),
                Cell::new(record.created_at.format("%Y-%m-%d %H:%M:%S UTC")),
            ]));
        }

        format!(
            "{}\n{} record(s) in {}\n",
            table,
            records.len(),
            path.display()
        )
    }
}

/// The value or error held by a serialized tool result
fn output_summary(output_data: &str) -> String {
    match serde_json::from_str::<ToolOutput>(output_data) {
        Ok(output) => match (output.value(), output.error()) {
            (Some(value), _) => value.to_string(),
            (None, Some(error)) => format!("error: {}", error),
            (None, None) => String::new(),
        },
        Err(_) => output_data.to_string(),
    }
}

/// Single-line, length-limited view of `text`
fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let mut cut: String = flat.chars().take(PREVIEW_CHARS - 1).collect();
        cut.push('…');
        cut
    }
}
