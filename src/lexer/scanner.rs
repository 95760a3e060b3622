//! Scanner: a single left-to-right pass applying [`RULES`] in priority order.
//!
//! At each position the first rule that matches wins. Identifiers spelled
//! like reserved words are re-tagged as keywords, and a character no rule
//! accepts becomes a one-character [`TokenKind::Unknown`] token. Scanning
//! never stops early and never fails.
//!
//! Layout and comment tokens are part of the output: every input character
//! belongs to exactly one token, which keeps line/column bookkeeping exact.
//! Callers drop them with [`TokenKind::is_trivia`] or
//! [`TokenKind::is_comment`] before classification.

use super::diagnostics::LexDiagnostic;
use super::rules::{is_punctuator, is_reserved_word, RULES};
use super::token::{SourceLocation, Token, TokenKind};
use tracing::{debug, trace};

/// Tokens in source order plus whatever diagnostics the pass recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
}

/// Scanner over one source text
pub struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the cursor
    position: usize,
    line: usize,
    column: usize,
    /// Set once a `/*` fails to close: no `*/` exists past this offset, so
    /// later block-comment attempts can be skipped without searching again.
    comment_unclosed_from: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
            comment_unclosed_from: None,
        }
    }

    /// Run the pass to completion.
    pub fn scan(mut self) -> ScanOutput {
        let mut output = ScanOutput::default();

        while let Some(ch) = self.peek() {
            let token = match self.match_rule() {
                Some((kind, len)) => self.emit(kind, len),
                None => self.fallback(ch),
            };

            if let Some(diagnostic) = self.diagnose(&token) {
                trace!(%diagnostic, "lexical diagnostic");
                output.diagnostics.push(diagnostic);
            }
            output.tokens.push(token);
        }

        debug!(
            bytes = self.input.len(),
            tokens = output.tokens.len(),
            diagnostics = output.diagnostics.len(),
            lines = self.line,
            "scan complete"
        );
        output
    }

    /// First rule in registry order that matches at the cursor.
    fn match_rule(&mut self) -> Option<(TokenKind, usize)> {
        let rest = self.rest();

        for rule in &RULES {
            if rule.kind == TokenKind::CommentMulti
                && self
                    .comment_unclosed_from
                    .is_some_and(|from| self.position >= from)
            {
                continue;
            }

            if let Some(len) = rule.match_at(rest) {
                return Some((rule.kind, len));
            }

            if rule.kind == TokenKind::CommentMulti && rest.starts_with("/*") {
                self.comment_unclosed_from = Some(self.position);
            }
        }

        None
    }

    /// Build the token for a rule match of `len` bytes and advance past it.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let location = self.current_location();
        let input = self.input;
        let value = &input[self.position..self.position + len];
        let kind = resolve_kind(kind, value);
        self.advance(value);
        Token::new(kind, value, location)
    }

    /// No rule matched: consume exactly one character as `Unknown`.
    fn fallback(&mut self, ch: char) -> Token {
        let location = self.current_location();
        let input = self.input;
        let value = &input[self.position..self.position + ch.len_utf8()];
        self.advance(value);
        Token::new(TokenKind::Unknown, value, location)
    }

    /// Inspect a just-emitted token for signs of fragmented input.
    fn diagnose(&self, token: &Token) -> Option<LexDiagnostic> {
        let location = token.location;
        match (token.kind, token.value.as_str()) {
            (TokenKind::SpecialSymbol, "\"") => Some(LexDiagnostic::UnterminatedString { location }),
            (TokenKind::SpecialSymbol, "'") => Some(LexDiagnostic::InvalidCharLiteral { location }),
            // The cursor already sits past the '/'.
            (TokenKind::Operator, "/") if self.rest().starts_with('*') => {
                Some(LexDiagnostic::UnterminatedComment { location })
            }
            (TokenKind::Unknown, value) => value
                .chars()
                .next()
                .map(|ch| LexDiagnostic::UnknownCharacter { ch, location }),
            _ => None,
        }
    }

    /// Move the cursor over `consumed`, updating line and column.
    fn advance(&mut self, consumed: &str) {
        self.position += consumed.len();

        match consumed.rfind('\n') {
            Some(last) => {
                self.line += consumed.matches('\n').count();
                // Characters from the last newline inclusive: the column of
                // the next character on the new line.
                self.column = consumed[last..].chars().count();
            }
            None => self.column += consumed.chars().count(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Emission-time re-tagging of a matched lexeme.
fn resolve_kind(kind: TokenKind, value: &str) -> TokenKind {
    match kind {
        TokenKind::Identifier if is_reserved_word(value) => TokenKind::Keyword,
        TokenKind::SpecialSymbol if is_punctuator(value) => TokenKind::Punctuator,
        other => other,
    }
}

/// Tokenize `text` into the raw token sequence, trivia included.
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::new(text).scan().tokens
}
