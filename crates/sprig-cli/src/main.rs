//! `sprig-lex`: dump the Sprig token stream of a file or stdin.
//!
//! Set `RUST_LOG=sprig_lexer=trace` to follow the lexer token by token.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sprig_lexer::{LexResult, Lexer};
use sprig_types::SourceFile;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use render::{render_diagnostics, render_tokens, Format};

#[derive(Parser)]
#[command(name = "sprig-lex")]
#[command(about = "Print the token stream of a Sprig source file")]
struct Cli {
    /// Source file to lex. Reads stdin when omitted or `-`.
    path: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Omit the trailing EOF token.
    #[arg(long)]
    no_eof: bool,

    /// Exit with status 1 if the input contains illegal characters.
    #[arg(long)]
    deny_illegal: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(clean) if clean || !cli.deny_illegal => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Lex the input and print it. Returns `false` if illegal characters were found.
fn run(cli: &Cli) -> sprig_types::Result<bool> {
    let file = read_input(cli.path.as_deref())?;
    debug!(file = %file.name, bytes = file.len(), "lexing");

    let result = lex_input(&file);

    for line in render_tokens(&result.tokens, cli.format, !cli.no_eof)? {
        println!("{line}");
    }
    for line in render_diagnostics(&file.name, &result.diagnostics) {
        eprintln!("{line}");
    }

    Ok(!result.diagnostics.has_errors())
}

/// Read the input as raw bytes; no UTF-8 validation happens before lexing.
fn read_input(path: Option<&std::path::Path>) -> sprig_types::Result<SourceFile> {
    match path {
        Some(path) if path.as_os_str() != "-" => SourceFile::read(path),
        _ => SourceFile::from_reader("<stdin>", std::io::stdin().lock()),
    }
}

fn lex_input(file: &SourceFile) -> LexResult {
    Lexer::from_bytes(&file.source).lex()
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
