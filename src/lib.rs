//! # Introduction
//!
//! clexer converts C-like source text into a stream of classified tokens and
//! groups them into reporting categories: keywords, identifiers,
//! punctuation, operators, constants and literals.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → (drop comments) → Classifier → Categories
//! ```
//!
//! 1. [`lexer`] — the rule registry and the single-pass scanner. Every
//!    input character lands in exactly one token; nothing is rejected.
//! 2. [`classify`] — groups token values by category and builds the
//!    de-duplicated breakdown with occurrence counts.
//! 3. [`analysis`] — runs the whole pipeline with an [`AnalyzerConfig`].
//!
//! ```
//! use clexer::classify::{classify, Category};
//! use clexer::lexer::tokenize;
//!
//! let tokens: Vec<_> = tokenize("int a, a, b; // done")
//!     .into_iter()
//!     .filter(|t| !t.kind.is_comment())
//!     .collect();
//! let categories = classify(&tokens);
//! assert_eq!(categories.get(Category::Identifiers), ["a", "a", "b"]);
//! ```
//!
//! The scanner and classifier are pure functions over immutable input. The
//! rule table and reserved-word set are process-wide statics, so any number
//! of threads may scan concurrently.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod lexer;

pub use analysis::{Analysis, Analyzer, AnalyzerConfig};
pub use classify::{classify, Category, Classification};
pub use error::AnalysisError;
pub use lexer::{tokenize, Token, TokenKind};

/// Analyze `source` with the default configuration.
pub fn analyze(source: &str) -> Result<Analysis, AnalysisError> {
    Analyzer::default().analyze(source)
}
