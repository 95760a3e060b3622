//! Error types for the analysis pipeline
//!
//! Tokenizing and classifying never fail; only the pipeline entry point
//! rejects input, and only when there is nothing to analyze.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Source is empty or contains only whitespace
    #[error("no code to analyze")]
    EmptySource,
}
