//! Lexical diagnostics recorded alongside the token stream.
//!
//! The scanner never fails: malformed input is fragmented into smaller
//! tokens. These diagnostics describe where that happened so callers can
//! surface it, without changing a single emitted token.

use super::token::SourceLocation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexDiagnostic {
    /// A `"` that does not open a complete string literal on its line
    #[error("unterminated string literal at line {}, column {}", .location.line, .location.column)]
    UnterminatedString { location: SourceLocation },

    /// A `'` that does not open a well-formed character literal
    #[error("invalid character literal at line {}, column {}", .location.line, .location.column)]
    InvalidCharLiteral { location: SourceLocation },

    /// A `/*` with no closing `*/`
    #[error("unterminated block comment at line {}, column {}", .location.line, .location.column)]
    UnterminatedComment { location: SourceLocation },

    /// A character no rule accepts
    #[error("unknown character {:?} at line {}, column {}", .ch, .location.line, .location.column)]
    UnknownCharacter { ch: char, location: SourceLocation },
}

impl LexDiagnostic {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexDiagnostic::UnterminatedString { location }
            | LexDiagnostic::InvalidCharLiteral { location }
            | LexDiagnostic::UnterminatedComment { location }
            | LexDiagnostic::UnknownCharacter { location, .. } => *location,
        }
    }
}
