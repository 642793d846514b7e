mod error_formatter;
mod formatter;
mod interactive;
mod mcp;
mod server;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use texttools::{JsonlHistory, MemoryHistory, ResourceLimits, ToolKind, ToolOutput, Toolbox};

#[derive(Parser)]
#[command(name = "texttools")]
#[command(about = "Small, strict text tools: JSON validation and Base64 encoding.")]
#[command(
    long_about = "texttools validates and pretty-prints JSON and converts text to and from standard Base64.\nRun a tool once from the command line, serve the tools over HTTP, or integrate with AI tools via MCP.\nEvery invocation can be recorded to an append-only usage history."
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Usage history file (JSON Lines); every tool invocation is appended to it
    #[arg(long, global = true, env = "TEXTTOOLS_HISTORY", value_name = "FILE")]
    history: Option<PathBuf>,

    /// Reject inputs larger than this many bytes
    #[arg(long, global = true, default_value_t = ResourceLimits::default().max_input_bytes)]
    max_input_bytes: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate JSON and print it pretty-printed
    ///
    /// Prints the document with two-space indentation and the original key order.
    /// Invalid documents are reported with the offending line and column.
    Json {
        /// JSON text (omit or use '-' to read stdin)
        text: Option<String>,
        /// Output the bare result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Encode text as standard Base64
    Encode {
        /// Text to encode (omit or use '-' to read stdin)
        text: Option<String>,
        /// Output the bare result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Decode standard Base64 back to text
    ///
    /// Only canonical Base64 is accepted: the input must use the standard alphabet,
    /// be padded to a multiple of four characters, and re-encode to exactly itself.
    Decode {
        /// Base64 text to decode (omit or use '-' to read stdin)
        text: Option<String>,
        /// Output the bare result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Show recorded tool usage, most recent first
    History {
        /// Show at most this many records
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Pick a tool and enter text with interactive prompts
    Interactive,
    /// Start HTTP RPC server (default: localhost:2022)
    ///
    /// Serves the tools over HTTP POST requests and records every call.
    /// API: POST /parse_json {json_text}, POST /encode_base64 {text},
    /// POST /decode_base64 {base64_text}, GET /tool_usage
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, env = "SERVER_PORT", default_value = "2022")]
        port: u16,
    },
    /// Start MCP server for AI assistant integration (stdio)
    ///
    /// Runs an MCP server over stdio that exposes the tools and the usage history.
    Mcp,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Json { text, raw } => {
            run_command(&cli.global, ToolKind::JsonParser, text.as_deref(), *raw)
        }
        Commands::Encode { text, raw } => {
            run_command(&cli.global, ToolKind::Base64Encoder, text.as_deref(), *raw)
        }
        Commands::Decode { text, raw } => {
            run_command(&cli.global, ToolKind::Base64Decoder, text.as_deref(), *raw)
        }
        Commands::History { limit } => history_command(&cli.global, *limit),
        Commands::Interactive => interactive_command(&cli.global),
        Commands::Server { host, port } => server_command(&cli.global, host, *port),
        Commands::Mcp => mcp_command(&cli.global),
    };

    if let Err(e) = result {
        // Check if it's a ToolError and format it nicely, otherwise use default
        if let Some(tool_err) = e.downcast_ref::<texttools::ToolError>() {
            eprintln!("{}", error_formatter::format_error(tool_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run_command(global: &GlobalArgs, kind: ToolKind, text: Option<&str>, raw: bool) -> Result<()> {
    let input = read_input(text)?;
    let toolbox = build_toolbox(global, false)?;

    let output = toolbox.run(kind, &input)?;
    let formatter = Formatter::default();

    if output.is_success() {
        print!("{}", formatter.format_output(kind, &output, raw));
        return Ok(());
    }

    report_failure(kind, &input, &output, raw);
    std::process::exit(1);
}

/// Print a failure result; JSON syntax errors get a source report unless raw
fn report_failure(kind: ToolKind, input: &str, output: &ToolOutput, raw: bool) {
    if kind == ToolKind::JsonParser && !raw {
        if let Err(syntax_err) = texttools::json::check(input) {
            eprintln!("{}", error_formatter::format_json_error(input, &syntax_err));
            return;
        }
    }

    eprintln!("{}", output.error().unwrap_or("Unknown failure"));
}

fn history_command(global: &GlobalArgs, limit: Option<usize>) -> Result<()> {
    let Some(path) = &global.history else {
        anyhow::bail!(
            "No usage history configured. Pass --history FILE or set TEXTTOOLS_HISTORY."
        );
    };

    let toolbox = build_toolbox(global, false)?;
    let mut records = toolbox.usage_history()?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let formatter = Formatter::default();
    print!("{}", formatter.format_history(path, &records));

    Ok(())
}

fn interactive_command(global: &GlobalArgs) -> Result<()> {
    let toolbox = build_toolbox(global, false)?;
    let formatter = Formatter::default();

    loop {
        let (kind, input) = interactive::prompt_invocation()?;
        let output = toolbox.run(kind, &input)?;

        if output.is_success() {
            print!("{}", formatter.format_output(kind, &output, false));
        } else {
            report_failure(kind, &input, &output, false);
        }

        if !interactive::prompt_continue()? {
            return Ok(());
        }
    }
}

fn server_command(global: &GlobalArgs, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let toolbox = build_toolbox(global, true)?;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(toolbox, host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (global, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

fn mcp_command(global: &GlobalArgs) -> Result<()> {
    #[cfg(feature = "mcp")]
    {
        let toolbox = build_toolbox(global, true)?;
        mcp::server::start_server(toolbox)?;
    }

    #[cfg(not(feature = "mcp"))]
    {
        let _ = global;
        eprintln!("Error: MCP feature not enabled");
        eprintln!("Recompile with: cargo build --features mcp");
        std::process::exit(1);
    }

    Ok(())
}

/// Build a toolbox from the global options
///
/// Long-running servers always record usage; without a history file they
/// keep the most recent `max_history_records` calls in memory.
fn build_toolbox(global: &GlobalArgs, in_memory_fallback: bool) -> Result<Toolbox> {
    let limits = ResourceLimits::new().with_max_input_bytes(global.max_input_bytes);
    let capacity = limits.max_history_records;
    let toolbox = Toolbox::with_limits(limits);

    let toolbox = match &global.history {
        Some(path) => toolbox.with_history(Arc::new(JsonlHistory::open(path)?)),
        None if in_memory_fallback => {
            toolbox.with_history(Arc::new(MemoryHistory::with_capacity(capacity)))
        }
        None => toolbox,
    };

    Ok(toolbox)
}

/// Read the tool input from the argument or stdin
///
/// A single trailing newline from stdin is dropped so `echo ... |` works as expected.
fn read_input(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            if input.ends_with('\n') {
                input.pop();
                if input.ends_with('\r') {
                    input.pop();
                }
            }
            Ok(input)
        }
    }
}
