//! Token types for the Sprig lexer.
//!
//! Defines [`TokenKind`], a closed set covering every lexeme in Sprig, and
//! [`Token`], which pairs a kind with the exact source text that produced it.

use serde::Serialize;
use std::fmt;

/// All nine reserved identifiers in Sprig.
///
/// The lexer recognises each one and emits a specific keyword token instead of
/// [`TokenKind::Ident`].
pub const ALL_KEYWORDS: &[&str] = &[
    "fn", "let", "true", "false", "if", "else", "return", "for", "break",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the Sprig lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text this token was scanned from. Empty for [`TokenKind::Eof`].
    pub literal: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    /// Returns `true` if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// Returns `true` if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind.name(), self.literal)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in the Sprig language.
///
/// Kinds carry no payload: the matched text always lives in [`Token::literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // ── Special ──────────────────────────────────────────────

    /// End of input
    Eof,
    /// A byte that belongs to no token class
    Illegal,

    // ── Identifiers & literals ───────────────────────────────

    /// User-defined identifier: `add`, `foo_bar`
    Ident,
    /// Decimal integer literal, kept as text: `5`, `007`
    Int,

    // ── Operators ────────────────────────────────────────────

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!=`
    NotEq,
    /// `==`
    Eq,

    // ── Delimiters ───────────────────────────────────────────

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ── Keywords ─────────────────────────────────────────────

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `true`
    True,
    /// `false`
    False,
    /// `for`
    For,
    /// `break`
    Break,
}

impl TokenKind {
    /// Look up a reserved identifier. Returns `Some(kind)` for the nine
    /// reserved words, `None` for user identifiers.
    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        Some(match s {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "for" => TokenKind::For,
            "break" => TokenKind::Break,
            _ => return None,
        })
    }

    /// Look up a single-character operator or delimiter.
    pub fn from_symbol(ch: u8) -> Option<TokenKind> {
        Some(match ch {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'!' => TokenKind::Bang,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        })
    }

    /// Returns `true` if this token kind is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::True
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Break
        )
    }

    /// Canonical kind name used in token dumps.
    ///
    /// Operators and delimiters are named by their own text, everything else
    /// by an upper-case tag.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Break => "BREAK",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::NotEq => "!=",
            TokenKind::Eq => "==",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Special
            TokenKind::Eof => f.write_str("end of file"),
            TokenKind::Illegal => f.write_str("illegal character"),
            // Identifiers & literals
            TokenKind::Ident => f.write_str("identifier"),
            TokenKind::Int => f.write_str("integer"),
            // Keywords — display the Sprig source text
            TokenKind::Function => f.write_str("fn"),
            TokenKind::Let => f.write_str("let"),
            TokenKind::Return => f.write_str("return"),
            TokenKind::If => f.write_str("if"),
            TokenKind::Else => f.write_str("else"),
            TokenKind::True => f.write_str("true"),
            TokenKind::False => f.write_str("false"),
            TokenKind::For => f.write_str("for"),
            TokenKind::Break => f.write_str("break"),
            // Operators & delimiters
            other => f.write_str(other.name()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keywords_count() {
        assert_eq!(ALL_KEYWORDS.len(), 9);
    }

    #[test]
    fn test_from_keyword_recognises_all() {
        for &kw in ALL_KEYWORDS {
            assert!(
                TokenKind::from_keyword(kw).is_some(),
                "from_keyword should recognise '{kw}'"
            );
        }
    }

    #[test]
    fn test_from_keyword_returns_none_for_identifiers() {
        let non_keywords = [
            "foo", "x", "letx", "func", "function", "Let", "TRUE", "_", "iff", "breaks",
        ];
        for &name in &non_keywords {
            assert!(
                TokenKind::from_keyword(name).is_none(),
                "from_keyword should not recognise '{name}'"
            );
        }
    }

    #[test]
    fn test_from_keyword_mapping() {
        assert_eq!(TokenKind::from_keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::from_keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::from_keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::from_keyword("false"), Some(TokenKind::False));
        assert_eq!(TokenKind::from_keyword("if"), Some(TokenKind::If));
        assert_eq!(TokenKind::from_keyword("else"), Some(TokenKind::Else));
        assert_eq!(TokenKind::from_keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::from_keyword("for"), Some(TokenKind::For));
        assert_eq!(TokenKind::from_keyword("break"), Some(TokenKind::Break));
    }

    #[test]
    fn test_is_keyword_true_for_all() {
        for &kw in ALL_KEYWORDS {
            let kind = TokenKind::from_keyword(kw).unwrap();
            assert!(kind.is_keyword(), "is_keyword should return true for '{kw}'");
        }
    }

    #[test]
    fn test_is_keyword_false_for_non_keywords() {
        let non_keyword_kinds = [
            TokenKind::Eof,
            TokenKind::Illegal,
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::LBrace,
        ];
        for kind in &non_keyword_kinds {
            assert!(!kind.is_keyword(), "is_keyword should be false for {kind:?}");
        }
    }

    #[test]
    fn test_from_symbol_covers_all_single_chars() {
        for &ch in b"=+-!*/<>,;:(){}" {
            let kind = TokenKind::from_symbol(ch);
            assert!(kind.is_some(), "from_symbol should recognise '{}'", ch as char);
            assert_eq!(kind.unwrap().name(), (ch as char).to_string());
        }
    }

    #[test]
    fn test_from_symbol_rejects_others() {
        for &ch in b"@#$%^&|[]\"'.?~` \0a1_" {
            assert_eq!(TokenKind::from_symbol(ch), None, "byte {ch:#04x}");
        }
    }

    #[test]
    fn test_token_construction() {
        let token = Token::new(TokenKind::Let, "let");
        assert_eq!(token.kind, TokenKind::Let);
        assert_eq!(token.literal, "let");
        assert!(token.is_keyword());
        assert!(!token.is_eof());
    }

    #[test]
    fn test_eof_token_has_empty_literal() {
        let token = Token::eof();
        assert!(token.is_eof());
        assert!(token.literal.is_empty());
    }

    #[test]
    fn test_token_identifier_not_keyword() {
        let token = Token::new(TokenKind::Ident, "foo");
        assert!(!token.is_keyword());
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::Eof.name(), "EOF");
        assert_eq!(TokenKind::Illegal.name(), "ILLEGAL");
        assert_eq!(TokenKind::Ident.name(), "IDENT");
        assert_eq!(TokenKind::Int.name(), "INT");
        assert_eq!(TokenKind::Function.name(), "FUNCTION");
        assert_eq!(TokenKind::NotEq.name(), "!=");
        assert_eq!(TokenKind::Eq.name(), "==");
    }

    #[test]
    fn test_display_roundtrip_keywords() {
        // Every keyword's Display output should match its source text
        for &kw in ALL_KEYWORDS {
            let kind = TokenKind::from_keyword(kw).unwrap();
            assert_eq!(kind.to_string(), kw, "Display should match keyword text for '{kw}'");
        }
    }

    #[test]
    fn test_display_operators_and_special() {
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::RBrace.to_string(), "}");
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Let, "let").to_string(), "LET \"let\"");
        assert_eq!(Token::new(TokenKind::Int, "5").to_string(), "INT \"5\"");
        assert_eq!(Token::eof().to_string(), "EOF \"\"");
    }

    #[test]
    fn test_token_serializes_snake_case_kind() {
        let json = serde_json::to_string(&Token::new(TokenKind::NotEq, "!=")).unwrap();
        assert_eq!(json, r#"{"kind":"not_eq","literal":"!="}"#);
    }
}
