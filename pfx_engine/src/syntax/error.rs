//! Clause builder errors with error code mapping
//!
//! Every variant is terminal for the enclosing evaluation: callers treat
//! these as request-level validation failures, not system faults.

use crate::grammar::Operator;
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Clause building errors with span-accurate reporting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexical(#[from] LexerError),

    #[error("Unknown operand '{name}' at {span}")]
    UnknownOperand { name: String, span: Span },

    #[error("Operand too long: {length} characters at {span}")]
    OperandTooLong { length: usize, span: Span },

    #[error("Operator '{token}' not found at {span}")]
    UnknownOperator { token: String, span: Span },

    #[error("Incomplete clause '{source_text}': expected OPERAND OPERATOR VALUE at {span}")]
    IncompleteClause { source_text: String, span: Span },

    #[error("Value set contains no elements at {span}")]
    EmptyValueSet { span: Span },

    #[error("Value set too large: {count} elements at {span}")]
    ValueSetTooLarge { count: usize, span: Span },

    #[error("Operator '{operator}' and value form disagree (set valued: {set_valued}) at {span}")]
    OperatorValueMismatch {
        operator: Operator,
        set_valued: bool,
        span: Span,
    },

    #[error("Error parsing values for clause '{source_text}'")]
    InvalidClause { source_text: String },

    #[error("Malformed expression: {message}")]
    MalformedExpression { message: String },
}

impl SyntaxError {
    /// Create unknown operand error
    pub fn unknown_operand(name: &str, span: Span) -> Self {
        Self::UnknownOperand {
            name: name.to_string(),
            span,
        }
    }

    /// Create unknown operator error
    pub fn unknown_operator(token: &str, span: Span) -> Self {
        Self::UnknownOperator {
            token: token.to_string(),
            span,
        }
    }

    /// Create incomplete clause error
    pub fn incomplete_clause(source_text: &str, span: Span) -> Self {
        Self::IncompleteClause {
            source_text: source_text.to_string(),
            span,
        }
    }

    /// Create invalid clause error
    pub fn invalid_clause(source_text: &str) -> Self {
        Self::InvalidClause {
            source_text: source_text.to_string(),
        }
    }

    /// Create malformed expression error
    pub fn malformed_expression(message: &str) -> Self {
        Self::MalformedExpression {
            message: message.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Lexical(inner) => inner.error_code(),
            Self::UnknownOperand { .. } => codes::syntax::UNKNOWN_OPERAND,
            Self::OperandTooLong { .. } => codes::syntax::OPERAND_TOO_LONG,
            Self::UnknownOperator { .. } => codes::syntax::UNKNOWN_OPERATOR,
            Self::IncompleteClause { .. } => codes::syntax::INCOMPLETE_CLAUSE,
            Self::EmptyValueSet { .. } => codes::syntax::EMPTY_VALUE_SET,
            Self::ValueSetTooLarge { .. } => codes::syntax::VALUE_SET_TOO_LARGE,
            Self::OperatorValueMismatch { .. } => codes::syntax::OPERATOR_VALUE_MISMATCH,
            Self::InvalidClause { .. } => codes::syntax::INVALID_CLAUSE,
            Self::MalformedExpression { .. } => codes::syntax::MALFORMED_EXPRESSION,
        }
    }

    /// Get span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnknownOperand { span, .. }
            | Self::OperandTooLong { span, .. }
            | Self::UnknownOperator { span, .. }
            | Self::IncompleteClause { span, .. }
            | Self::EmptyValueSet { span }
            | Self::ValueSetTooLarge { span, .. }
            | Self::OperatorValueMismatch { span, .. } => Some(*span),
            Self::Lexical(_) | Self::InvalidClause { .. } | Self::MalformedExpression { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map() {
        let err = SyntaxError::unknown_operand("EMP_X", Span::new(0, 5));
        assert_eq!(err.error_code().as_str(), "E010");

        let err = SyntaxError::unknown_operator("foo", Span::new(6, 9));
        assert_eq!(err.error_code().as_str(), "E011");

        let err = SyntaxError::malformed_expression("arity mismatch");
        assert_eq!(err.error_code().as_str(), "E017");
    }

    #[test]
    fn test_span_accessors() {
        let err = SyntaxError::unknown_operand("EMP_X", Span::new(0, 5));
        assert_eq!(err.span(), Some(Span::new(0, 5)));

        let err = SyntaxError::invalid_clause("DEPT eq");
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_lexical_error_conversion() {
        let err: SyntaxError = crate::lexical::LexerError::EmptyExpression.into();
        assert_eq!(err.error_code().as_str(), "E001");
    }
}
