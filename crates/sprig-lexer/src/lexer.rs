//! Core Sprig lexer — converts source text to a token stream.
//!
//! The lexer walks the input one byte at a time. Classification is ASCII-only:
//! digits start integer literals, letters and `_` start identifiers, and every
//! byte outside the known classes becomes a single [`TokenKind::Illegal`]
//! token so scanning always makes progress.

use std::iter::FusedIterator;

use sprig_types::{Diagnostics, LexDiagnostic};
use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// The Sprig lexer.
///
/// Produces one [`Token`] per call to [`Lexer::next_token`]. Once the input is
/// exhausted every further call returns [`TokenKind::Eof`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Index of the byte currently under examination.
    position: usize,
    /// Index of the next unread byte. Always `position + 1` after priming.
    read_position: usize,
    /// The byte at `position`, or `None` once past the end of input.
    ch: Option<u8>,
}

/// Result of lexing: tokens + any diagnostics collected.
#[derive(Debug, Clone)]
pub struct LexResult {
    /// The token stream (always ends with exactly one [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// One diagnostic per illegal character encountered.
    pub diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over source text.
    pub fn new(source: &'src str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a new lexer over raw bytes. Any byte sequence is accepted.
    pub fn from_bytes(source: &'src [u8]) -> Self {
        let mut lexer = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token and advance past it.
    pub fn next_token(&mut self) -> Token {
        self.scan_token().1
    }

    /// Lex the entire input into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();
        let mut diagnostics = Diagnostics::empty();

        loop {
            let (offset, token) = self.scan_token();
            if token.kind == TokenKind::Illegal {
                diagnostics.push(LexDiagnostic::illegal_character(offset, token.literal.as_str()));
            }

            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            illegal = diagnostics.total,
            "lexed {} bytes",
            self.source.len()
        );

        LexResult {
            tokens,
            diagnostics,
        }
    }

    /// Byte offset of the character currently under examination.
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Returns `true` once the cursor has moved past the last byte.
    pub fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Source text from `start` up to (not including) the current position,
    /// one `char` per byte.
    fn text_from(&self, start: usize) -> String {
        self.source[start..self.position]
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token, returning it together with its starting byte offset.
    fn scan_token(&mut self) -> (usize, Token) {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.ch {
            // Don't advance: repeated calls keep returning Eof.
            None => Token::eof(),

            Some(b'0'..=b'9') => self.scan_integer(start),

            Some(ch) if is_letter(ch) => self.scan_identifier(start),

            // `!=` and `==` win over their single-character prefixes.
            Some(ch @ (b'!' | b'=')) if self.peek_char() == Some(b'=') => {
                self.read_char();
                self.read_char();
                let kind = if ch == b'!' {
                    TokenKind::NotEq
                } else {
                    TokenKind::Eq
                };
                Token::new(kind, self.text_from(start))
            }

            Some(ch) => {
                self.read_char();
                let kind = TokenKind::from_symbol(ch).unwrap_or(TokenKind::Illegal);
                Token::new(kind, char::from(ch).to_string())
            }
        };

        trace!(offset = start, kind = ?token.kind, literal = %token.literal, "token");
        (start, token)
    }

    fn scan_integer(&mut self, start: usize) -> Token {
        while matches!(self.ch, Some(b'0'..=b'9')) {
            self.read_char();
        }
        Token::new(TokenKind::Int, self.text_from(start))
    }

    /// Identifiers continue over letters and `_` only; digits end the run.
    fn scan_identifier(&mut self, start: usize) -> Token {
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        let text = self.text_from(start);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, [`TokenKind::Eof`].
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lex `source` into a token vector ending with [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).lex().tokens
}
