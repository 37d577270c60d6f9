use crate::evaluation::{ComposeError, EvalError};
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;
use crate::utils::Span;

/// Engine-level errors aggregating every pipeline stage.
///
/// All variants are terminal for the enclosing evaluation: no retry, no
/// partial result, no silent default-to-false.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Tokenization failed: {0}")]
    Lexical(#[from] LexerError),

    #[error("Clause building failed: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Clause evaluation failed: {0}")]
    Evaluation(#[from] EvalError),

    #[error("Boolean composition failed: {0}")]
    Composition(#[from] ComposeError),

    #[error("Engine error: {message}")]
    Engine { message: String },
}

impl EngineError {
    pub fn engine_error(message: &str) -> Self {
        Self::Engine {
            message: message.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Lexical(inner) => inner.error_code(),
            Self::Syntax(inner) => inner.error_code(),
            Self::Evaluation(inner) => inner.error_code(),
            Self::Composition(inner) => inner.error_code(),
            Self::Engine { .. } => codes::engine::INTERNAL_ERROR,
        }
    }

    /// Whether the failure is a caller-input validation error (the
    /// 4xx-equivalent classification) rather than an internal fault.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Engine { .. } | Self::Composition(_))
    }

    /// Get span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax(inner) => inner.span(),
            Self::Lexical(_) | Self::Evaluation(_) | Self::Composition(_) | Self::Engine { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_codes_pass_through() {
        let err: EngineError = LexerError::EmptyExpression.into();
        assert_eq!(err.error_code().as_str(), "E001");
        assert!(err.is_input_error());

        let err = EngineError::engine_error("invariant broke");
        assert_eq!(err.error_code().as_str(), "E030");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_span_passes_through_syntax_errors() {
        let err: EngineError =
            SyntaxError::unknown_operand("MISSING", Span::new(0, 7)).into();
        assert_eq!(err.span(), Some(Span::new(0, 7)));

        let err: EngineError = LexerError::EmptyExpression.into();
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_composition_is_internal() {
        let err: EngineError = ComposeError::ArityMismatch {
            results: 2,
            connectors: 2,
        }
        .into();
        assert!(!err.is_input_error());
    }
}
