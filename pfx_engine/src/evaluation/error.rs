//! Typed evaluation and composition errors

use crate::grammar::Operator;
use crate::logging::{codes, Code};
use crate::placeholder::{TypeParseError, ValueType};

pub type EvalResult<T> = Result<T, EvalError>;

/// Per-clause evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("Operator '{operator}' not valid for {value_type}")]
    UnsupportedOperator {
        operator: Operator,
        value_type: ValueType,
    },

    #[error("No values found in set")]
    EmptyValueSet,

    #[error(transparent)]
    TypeParse(#[from] TypeParseError),

    #[error("Clause '{source_text}' reached evaluation without a value")]
    IncompleteClause { source_text: String },
}

impl EvalError {
    pub fn unsupported_operator(operator: Operator, value_type: ValueType) -> Self {
        Self::UnsupportedOperator {
            operator,
            value_type,
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnsupportedOperator { .. } => codes::evaluation::UNSUPPORTED_OPERATOR,
            Self::EmptyValueSet => codes::evaluation::EMPTY_VALUE_SET,
            Self::TypeParse(inner) => inner.error_code(),
            Self::IncompleteClause { .. } => codes::syntax::INVALID_CLAUSE,
        }
    }
}

/// Boolean composition errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Cannot compose {results} results with {connectors} connectors")]
    ArityMismatch { results: usize, connectors: usize },
}

impl ComposeError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::ArityMismatch { .. } => codes::evaluation::ARITY_MISMATCH,
        }
    }
}
