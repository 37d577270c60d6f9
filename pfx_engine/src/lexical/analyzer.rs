//! Expression tokenizer
//!
//! Splits the raw expression into clause segments and the ordered connector
//! sequence. Connector words (`and`/`or`) match whole whitespace-delimited
//! words only, so an operand like `ANDREW` or a value like `oreo` is never
//! split. Segments keep their spans into the normalized text for error
//! reporting downstream.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::EnginePreferences;
use crate::grammar::Connector;
use crate::logging::codes;
use crate::utils::Span;
use crate::log_debug;

/// Tokenizer errors with compile-time security boundaries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Expression is empty or blank")]
    EmptyExpression,

    #[error("Expression too long: {length} bytes (max {MAX_EXPRESSION_LENGTH})")]
    ExpressionTooLong { length: usize },

    #[error("Connector '{connector}' has no clause on one side")]
    DanglingConnector { connector: String },

    #[error("Too many clauses: {count} (max {MAX_CLAUSE_COUNT})")]
    TooManyClauses { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::EmptyExpression => codes::lexical::EMPTY_EXPRESSION,
            LexerError::ExpressionTooLong { .. } => codes::lexical::EXPRESSION_TOO_LONG,
            LexerError::DanglingConnector { .. } => codes::lexical::DANGLING_CONNECTOR,
            LexerError::TooManyClauses { .. } => codes::lexical::TOO_MANY_CLAUSES,
        }
    }
}

/// One clause segment with its location in the normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub span: Span,
}

/// Tokenizer output: clause segments plus ordered connectors.
///
/// Guaranteed: `segments.len() == connectors.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedExpression {
    pub segments: Vec<Segment>,
    pub connectors: Vec<Connector>,
    /// Whitespace-collapsed expression text the spans index into
    pub normalized: String,
}

/// Essential tokenizer metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub segment_count: usize,
    pub connector_count: usize,
    pub normalized_length: usize,
}

/// Expression tokenizer with runtime-preference-controlled metrics
#[derive(Debug, Default)]
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: EnginePreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create analyzer with custom runtime preferences
    pub fn with_preferences(preferences: EnginePreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize one expression into segments and connectors
    pub fn tokenize(&mut self, text: &str) -> Result<TokenizedExpression, LexerError> {
        if text.len() > MAX_EXPRESSION_LENGTH {
            return Err(LexerError::ExpressionTooLong { length: text.len() });
        }

        // Collapse runs of whitespace to single spaces
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            return Err(LexerError::EmptyExpression);
        }

        let mut segments = Vec::new();
        let mut connectors = Vec::new();

        // Current segment accumulator: span start and end in `normalized`
        let mut segment_start: Option<usize> = None;
        let mut segment_end = 0usize;
        let mut offset = 0usize;

        for word in normalized.split(' ') {
            let word_span = Span::new(offset, offset + word.len());

            if let Some(connector) = Connector::lookup(word) {
                let start = segment_start.take().ok_or_else(|| {
                    LexerError::DanglingConnector {
                        connector: word.to_string(),
                    }
                })?;
                let span = Span::new(start, segment_end);
                segments.push(Segment {
                    text: span.slice(&normalized).to_string(),
                    span,
                });
                connectors.push(connector);
            } else {
                if segment_start.is_none() {
                    segment_start = Some(word_span.start);
                }
                segment_end = word_span.end;
            }

            offset = word_span.end + 1;
        }

        // Trailing connector leaves no open segment
        let start = segment_start.ok_or_else(|| LexerError::DanglingConnector {
            connector: connectors
                .last()
                .map(|c| c.token().to_string())
                .unwrap_or_default(),
        })?;
        let span = Span::new(start, segment_end);
        segments.push(Segment {
            text: span.slice(&normalized).to_string(),
            span,
        });

        if segments.len() > MAX_CLAUSE_COUNT {
            return Err(LexerError::TooManyClauses {
                count: segments.len(),
            });
        }

        if self.preferences.collect_metrics {
            self.metrics.segment_count = segments.len();
            self.metrics.connector_count = connectors.len();
            self.metrics.normalized_length = normalized.len();
        }

        log_debug!("Expression tokenized",
            "segments" => segments.len(),
            "connectors" => connectors.len()
        );

        Ok(TokenizedExpression {
            segments,
            connectors,
            normalized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokenize(text: &str) -> Result<TokenizedExpression, LexerError> {
        LexicalAnalyzer::new().tokenize(text)
    }

    #[test]
    fn test_single_clause() {
        let tokens = tokenize("DEPT eq 100").unwrap();
        assert_eq!(tokens.segments.len(), 1);
        assert_eq!(tokens.segments[0].text, "DEPT eq 100");
        assert!(tokens.connectors.is_empty());
    }

    #[test]
    fn test_connector_extraction_order() {
        let tokens = tokenize("A eq 1 AND B eq 2 or C eq 3").unwrap();
        assert_eq!(
            tokens.connectors,
            vec![Connector::And, Connector::Or]
        );
        assert_eq!(tokens.segments.len(), 3);
        assert_eq!(tokens.segments[1].text, "B eq 2");
    }

    #[test]
    fn test_arity_guarantee() {
        let tokens = tokenize("A eq 1 and B eq 2 and C eq 3 and D eq 4").unwrap();
        assert_eq!(tokens.segments.len(), tokens.connectors.len() + 1);
    }

    #[test]
    fn test_whitespace_collapse() {
        let tokens = tokenize("  DEPT   eq\t100   and  AGE gt 30 ").unwrap();
        assert_eq!(tokens.normalized, "DEPT eq 100 and AGE gt 30");
        assert_eq!(tokens.segments[0].text, "DEPT eq 100");
        assert_eq!(tokens.segments[1].text, "AGE gt 30");
    }

    #[test]
    fn test_connector_is_whole_word_match() {
        // "ANDREW" and "oreo" must not split
        let tokens = tokenize("ANDREW eq oreo").unwrap();
        assert_eq!(tokens.segments.len(), 1);
        assert!(tokens.connectors.is_empty());
    }

    #[test]
    fn test_set_with_spaces_stays_in_segment() {
        let tokens = tokenize("DEPT in (100, 200, 300) and AGE gt 30").unwrap();
        assert_eq!(tokens.segments[0].text, "DEPT in (100, 200, 300)");
    }

    #[test]
    fn test_segment_spans_index_normalized_text() {
        let tokens = tokenize("DEPT eq 100 or AGE gt 30").unwrap();
        for segment in &tokens.segments {
            assert_eq!(segment.span.slice(&tokens.normalized), segment.text);
        }
    }

    #[test]
    fn test_empty_expression() {
        assert_matches!(tokenize(""), Err(LexerError::EmptyExpression));
        assert_matches!(tokenize("   \t "), Err(LexerError::EmptyExpression));
    }

    #[test]
    fn test_dangling_connectors() {
        assert_matches!(
            tokenize("and DEPT eq 100"),
            Err(LexerError::DanglingConnector { .. })
        );
        assert_matches!(
            tokenize("DEPT eq 100 or"),
            Err(LexerError::DanglingConnector { .. })
        );
        assert_matches!(
            tokenize("DEPT eq 100 and or AGE gt 30"),
            Err(LexerError::DanglingConnector { .. })
        );
    }

    #[test]
    fn test_expression_too_long() {
        let huge = "x".repeat(MAX_EXPRESSION_LENGTH + 1);
        assert_matches!(
            tokenize(&huge),
            Err(LexerError::ExpressionTooLong { .. })
        );
    }

    fn preferences(collect_metrics: bool) -> EnginePreferences {
        EnginePreferences {
            log_clause_results: false,
            include_spans_in_errors: true,
            collect_metrics,
        }
    }

    #[test]
    fn test_metrics_collection() {
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences(true));
        analyzer.tokenize("A eq 1 and B eq 2").unwrap();
        assert_eq!(analyzer.metrics().segment_count, 2);
        assert_eq!(analyzer.metrics().connector_count, 1);
    }

    #[test]
    fn test_metrics_collection_disabled() {
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences(false));
        let tokens = analyzer.tokenize("A eq 1 and B eq 2").unwrap();

        // Tokenization output is unaffected; only the metrics stay empty
        assert_eq!(tokens.segments.len(), 2);
        assert_eq!(analyzer.metrics().segment_count, 0);
        assert_eq!(analyzer.metrics().connector_count, 0);
        assert_eq!(analyzer.metrics().normalized_length, 0);
    }
}
