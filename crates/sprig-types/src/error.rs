use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Maximum number of diagnostics stored before further ones are only counted.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
        }
    }
}

/// Numeric diagnostic code (E100–E199 are lexical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// A byte that belongs to no token class.
    pub const ILLEGAL_CHARACTER: Self = Self(100);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured lexical diagnostic.
///
/// Diagnostics are advisory: the offending input is still present in the
/// token stream and the downstream consumer decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexDiagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Byte offset of the offending input.
    pub offset: usize,
    /// The source text that triggered the diagnostic.
    pub literal: String,
}

impl LexDiagnostic {
    /// Create a diagnostic for an unrecognised byte.
    pub fn illegal_character(offset: usize, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        Self {
            code: ErrorCode::ILLEGAL_CHARACTER,
            severity: Severity::Error,
            message: format!("illegal character '{}'", literal.escape_default()),
            offset,
            literal,
        }
    }
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.offset, self.code, self.message)
    }
}

/// Diagnostics collected while lexing a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Stored diagnostics, at most [`MAX_DIAGNOSTICS`].
    pub items: Vec<LexDiagnostic>,
    /// Every diagnostic pushed, including the ones past the cap.
    pub total: usize,
}

impl Diagnostics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.total > 0
    }

    /// Add a diagnostic, respecting the [`MAX_DIAGNOSTICS`] limit.
    pub fn push(&mut self, diagnostic: LexDiagnostic) {
        if self.items.len() < MAX_DIAGNOSTICS {
            self.items.push(diagnostic);
        }
        self.total += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexDiagnostic> {
        self.items.iter()
    }
}

/// Errors raised by tooling around the lexer (reading input, encoding output).
///
/// The lexer itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SprigError {
    /// The input could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ILLEGAL_CHARACTER.to_string(), "E100");
    }

    #[test]
    fn test_illegal_character_diagnostic() {
        let d = LexDiagnostic::illegal_character(4, "@");
        assert_eq!(d.code, ErrorCode::ILLEGAL_CHARACTER);
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "illegal character '@'");
        assert_eq!(d.to_string(), "4: E100 illegal character '@'");
    }

    #[test]
    fn test_illegal_character_escapes_control_bytes() {
        let d = LexDiagnostic::illegal_character(0, "\0");
        assert_eq!(d.message, "illegal character '\\u{0}'");
        assert_eq!(d.literal, "\0");
    }

    #[test]
    fn test_diagnostics_max_limit() {
        let mut diags = Diagnostics::empty();
        for i in 0..25 {
            diags.push(LexDiagnostic::illegal_character(i, "$"));
        }
        // Only 20 stored, but total count is 25
        assert_eq!(diags.items.len(), 20);
        assert_eq!(diags.total, 25);
        assert!(diags.has_errors());
    }

    #[test]
    fn test_diagnostics_empty() {
        let diags = Diagnostics::empty();
        assert!(!diags.has_errors());
        assert_eq!(diags.iter().count(), 0);
    }

    #[test]
    fn test_diagnostic_json_serialization() {
        let d = LexDiagnostic::illegal_character(7, "#");
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"code\":100"));
        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("\"offset\":7"));

        let back: LexDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_io_error_display() {
        let err = SprigError::Io {
            path: PathBuf::from("missing.sprig"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read missing.sprig: not found");
    }
}
