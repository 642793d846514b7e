use anyhow::{Context, Result};
use inquire::{Confirm, Select, Text};
use texttools::ToolKind;

/// Ask which tool to run and for its input
pub fn prompt_invocation() -> Result<(ToolKind, String)> {
    let kind = select_tool()?;
    let input = prompt_input(kind)?;
    Ok((kind, input))
}

pub fn prompt_continue() -> Result<bool> {
    Confirm::new("Run another tool?")
        .with_default(true)
        .prompt()
        .context("Failed to get confirmation")
}

fn select_tool() -> Result<ToolKind> {
    let display_options: Vec<&str> = ToolKind::ALL.iter().map(|k| k.label()).collect();

    let selected = Select::new("Select a tool:", display_options.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get tool selection")?;

    let index = display_options
        .iter()
        .position(|label| *label == selected)
        .context("Failed to find selected tool")?;

    Ok(ToolKind::ALL[index])
}

fn prompt_input(kind: ToolKind) -> Result<String> {
    let (message, example) = match kind {
        ToolKind::JsonParser => ("JSON text:", r#"{"name":"John","age":30}"#),
        ToolKind::Base64Encoder => ("Text to encode:", "Hello World"),
        ToolKind::Base64Decoder => ("Base64 to decode:", "SGVsbG8gV29ybGQ="),
    };

    Text::new(message)
        .with_help_message(&format!("Example: {}", example))
        .prompt()
        .context(format!("Failed to get input for {}", kind.label()))
}
