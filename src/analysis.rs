//! Analysis pipeline
//!
//! A strict one-way pass over one source text:
//!
//! ```text
//! Source → Scanner → raw tokens → filter (comments, layout) → Classifier → summaries
//! ```
//!
//! Nothing persists between calls; every [`Analysis`] is built fresh and is
//! immutable once returned.

use std::borrow::Cow;

use tracing::debug;

use crate::classify::summary::{summarize, CategorySummary};
use crate::classify::{classify, Classification};
use crate::error::AnalysisError;
use crate::lexer::{LexDiagnostic, ScanOutput, Scanner, Token};

/// Options for [`Analyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Keep whitespace and newline tokens in the token listing.
    pub keep_layout: bool,
    /// Rewrite `\r\n` as `\n` before scanning. Otherwise each `\r` is
    /// reported as an unknown character.
    pub normalize_line_endings: bool,
    /// Keep the scanner's diagnostics in the result.
    pub report_diagnostics: bool,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self {
            keep_layout: false,
            normalize_line_endings: false,
            report_diagnostics: true,
        }
    }

    pub fn with_layout(mut self, keep: bool) -> Self {
        self.keep_layout = keep;
        self
    }

    pub fn with_normalized_line_endings(mut self, normalize: bool) -> Self {
        self.normalize_line_endings = normalize;
        self
    }

    pub fn with_diagnostics(mut self, report: bool) -> Self {
        self.report_diagnostics = report;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    tokens: Vec<Token>,
    comment_count: usize,
    classification: Classification,
    summaries: Vec<CategorySummary>,
    diagnostics: Vec<LexDiagnostic>,
}

impl Analysis {
    /// Tokens in source order, comments removed. Layout tokens are present
    /// only when [`AnalyzerConfig::keep_layout`] was set.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens excluding comments and layout.
    pub fn token_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.kind.is_layout()).count()
    }

    /// Number of comment tokens the filter removed.
    pub fn comment_count(&self) -> usize {
        self.comment_count
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn summaries(&self) -> &[CategorySummary] {
        &self.summaries
    }

    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }
}

/// Runs the scan → filter → classify pipeline with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one source text.
    ///
    /// Fails only when `source` is empty or whitespace-only.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn analyze(&self, source: &str) -> Result<Analysis, AnalysisError> {
        if source.trim().is_empty() {
            return Err(AnalysisError::EmptySource);
        }

        let source = if self.config.normalize_line_endings && source.contains("\r\n") {
            Cow::Owned(source.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(source)
        };

        let ScanOutput {
            tokens,
            diagnostics,
        } = Scanner::new(&source).scan();

        let comment_count = tokens.iter().filter(|t| t.kind.is_comment()).count();
        let keep_layout = self.config.keep_layout;
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !t.kind.is_comment() && (keep_layout || !t.kind.is_layout()))
            .collect();

        let classification = classify(&tokens);
        let summaries = summarize(&classification);
        let diagnostics = if self.config.report_diagnostics {
            diagnostics
        } else {
            Vec::new()
        };

        debug!(
            tokens = tokens.len(),
            comments = comment_count,
            classified = classification.len(),
            diagnostics = diagnostics.len(),
            "analysis complete"
        );

        Ok(Analysis {
            tokens,
            comment_count,
            classification,
            summaries,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::lexer::{SourceLocation, TokenKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_source_rejected() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze(""), Err(AnalysisError::EmptySource));
        assert_eq!(analyzer.analyze(" \n\t\n"), Err(AnalysisError::EmptySource));
    }

    #[test]
    fn test_comments_and_layout_filtered() {
        let analysis = Analyzer::default()
            .analyze("// header\nint x; /* note */\n")
            .expect("source is not empty");

        let values: Vec<_> = analysis.tokens().iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["int", "x", ";"]);
        assert_eq!(analysis.token_count(), 3);
        assert_eq!(analysis.comment_count(), 2);
        assert!(analysis.diagnostics().is_empty());
    }

    #[test]
    fn test_keep_layout() {
        let config = AnalyzerConfig::default().with_layout(true);
        let analysis = Analyzer::new(config)
            .analyze("a b\n")
            .expect("source is not empty");

        let kinds: Vec<_> = analysis.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Newline,
            ]
        );
        assert_eq!(analysis.token_count(), 2);
    }

    #[test]
    fn test_line_endings() {
        let source = "int a;\r\nint b;";

        let raw = Analyzer::default().analyze(source).expect("source is not empty");
        assert_eq!(
            raw.diagnostics(),
            [LexDiagnostic::UnknownCharacter {
                ch: '\r',
                location: SourceLocation::new(1, 7),
            }]
        );

        let config = AnalyzerConfig::default().with_normalized_line_endings(true);
        let normalized = Analyzer::new(config).analyze(source).expect("source is not empty");
        assert!(normalized.diagnostics().is_empty());
        assert_eq!(normalized.token_count(), 6);
        assert_eq!(normalized.tokens()[3].location, SourceLocation::new(2, 1));
    }

    #[test]
    fn test_diagnostics_can_be_dropped() {
        let config = AnalyzerConfig::default().with_diagnostics(false);
        let analysis = Analyzer::new(config)
            .analyze("x = \"open;")
            .expect("source is not empty");
        assert!(analysis.diagnostics().is_empty());
    }

    #[test]
    fn test_summaries_follow_classification() {
        let analysis = Analyzer::default()
            .analyze("int a, a, b;")
            .expect("source is not empty");

        assert_eq!(analysis.classification().get(Category::Identifiers), ["a", "a", "b"]);
        let identifiers = &analysis.summaries()[1];
        assert_eq!(identifiers.category, Category::Identifiers);
        assert_eq!(identifiers.total, 3);
        assert_eq!(identifiers.entries.len(), 2);
    }
}
