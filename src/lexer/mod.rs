//! C lexical analysis
//!
//! This module turns C-like source text into an ordered token sequence:
//! - [`rules`]: the ordered rule registry and the reserved-word set
//! - [`scanner`]: the single-pass, priority-ordered scanner
//! - [`token`]: token records and kind tags
//! - [`diagnostics`]: notes about fragmented literals and unknown characters
//!
//! This is not a parser and not a preprocessor: `#include <stdio.h>` is
//! lexed like any other text.

pub mod diagnostics;
pub mod rules;
pub mod scanner;
pub mod token;

pub use diagnostics::LexDiagnostic;
pub use scanner::{tokenize, ScanOutput, Scanner};
pub use token::{SourceLocation, Token, TokenKind};
