//! Lexical analysis for filter expressions
//!
//! Converts raw expression text into clause segments plus the ordered
//! connector sequence consumed by the clause builder.

pub mod analyzer;

pub use analyzer::{
    LexerError, LexicalAnalyzer, LexicalMetrics, Segment, TokenizedExpression,
};

use crate::config::runtime::EnginePreferences;

/// Tokenize expression text with default analyzer settings
pub fn tokenize_expression(text: &str) -> Result<TokenizedExpression, LexerError> {
    let mut analyzer = create_analyzer();
    analyzer.tokenize(text)
}

/// Create a new tokenizer for callers that want metrics afterwards
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create tokenizer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: EnginePreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}
