//! Token records produced by the scanner.

use std::fmt;

/// Source location information for tokens and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Classification tag attached to every lexeme.
///
/// The first twelve variants correspond one-to-one with the rules in
/// [`RULES`](super::rules::RULES). `Keyword` and `Unknown` are never matched
/// by a rule directly: `Keyword` is an `Identifier` re-tagged against the
/// reserved-word set, `Unknown` is the single-character fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StringLiteral,
    CharLiteral,
    FloatConstant,
    IntConstant,
    Identifier,
    CommentSingle,
    CommentMulti,
    Operator,
    Punctuator,
    SpecialSymbol,
    Whitespace,
    Newline,
    Keyword,
    Unknown,
}

impl TokenKind {
    /// Upper-snake name of the kind, e.g. `"FLOAT_CONSTANT"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::FloatConstant => "FLOAT_CONSTANT",
            TokenKind::IntConstant => "INT_CONSTANT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::CommentSingle => "COMMENT_SINGLE",
            TokenKind::CommentMulti => "COMMENT_MULTI",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::SpecialSymbol => "SPECIAL_SYMBOL",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentSingle | TokenKind::CommentMulti)
    }

    /// Whitespace and newlines: consumed for position bookkeeping only.
    pub fn is_layout(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// Comments and layout together; nothing downstream of the filter needs these.
    pub fn is_trivia(self) -> bool {
        self.is_comment() || self.is_layout()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified lexeme.
///
/// `value` is the exact source substring; `location` points at its first
/// character (1-based line and column, counted in characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            value: value.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}', {})", self.kind, self.value, self.location)
    }
}
