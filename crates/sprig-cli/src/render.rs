//! Token and diagnostic formatting for `sprig-lex`.

use clap::ValueEnum;
use sprig_lexer::Token;
use sprig_types::{Diagnostics, Result};

/// Output format for the token dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `KIND "literal"`, one token per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Render each token as one output line.
pub fn render_tokens(tokens: &[Token], format: Format, include_eof: bool) -> Result<Vec<String>> {
    tokens
        .iter()
        .filter(|t| include_eof || !t.is_eof())
        .map(|t| render_token(t, format))
        .collect()
}

fn render_token(token: &Token, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => token.to_string(),
        Format::Json => serde_json::to_string(token)?,
    })
}

/// Render diagnostics as `file:offset: code message` lines.
pub fn render_diagnostics(file: &str, diagnostics: &Diagnostics) -> Vec<String> {
    let mut lines: Vec<String> = diagnostics
        .iter()
        .map(|d| format!("{file}:{d}"))
        .collect();
    let hidden = diagnostics.total - diagnostics.items.len();
    if hidden > 0 {
        lines.push(format!("{file}: ... and {hidden} more illegal characters"));
    }
    lines
}
