//! Shared types for the Sprig toolchain.
//!
//! This crate defines source files, lexical diagnostics and the error type
//! used by tooling built around the lexer.

mod error;
mod source;

pub use error::{Diagnostics, ErrorCode, LexDiagnostic, Severity, SprigError, MAX_DIAGNOSTICS};
pub use source::SourceFile;

/// Result type used by Sprig tooling.
pub type Result<T> = std::result::Result<T, SprigError>;
