//! Parsed clause structures
//!
//! A [`Clause`] is one operand/operator/value(s) comparison unit. A
//! [`ParsedExpression`] is the full parse result: clauses plus the ordered
//! connector sequence joining them. Both are read-only after construction
//! and scoped to one evaluation request.

use crate::grammar::{Connector, Operator};
use crate::placeholder::{PlaceholderValue, ValueType};
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed comparison unit.
///
/// Invariant: exactly one of `single_value` / non-empty `value_set` is
/// populated, with `operator == In` implying the set form and every other
/// operator the single form. [`crate::validation::clause::is_complete`]
/// checks this after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Original text of this clause segment
    pub source_text: String,
    /// Location of the segment in the normalized expression
    pub span: Span,
    /// Resolved placeholder the operand name referred to
    pub operand: PlaceholderValue,
    pub operator: Operator,
    /// Comparison value for non-IN operators
    pub single_value: Option<String>,
    /// Literal elements for IN operators
    pub value_set: Vec<String>,
    /// Copied from the resolved placeholder at build time
    pub value_type: ValueType,
}

impl Clause {
    pub fn is_set_valued(&self) -> bool {
        !self.value_set.is_empty()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_text)
    }
}

/// Full parse result: clauses joined by the ordered connector sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpression {
    pub clauses: Vec<Clause>,
    /// `connectors[i]` joins `clauses[i]` to `clauses[i + 1]`
    pub connectors: Vec<Connector>,
}

impl ParsedExpression {
    pub fn new(clauses: Vec<Clause>, connectors: Vec<Connector>) -> Self {
        Self {
            clauses,
            connectors,
        }
    }

    /// Arity invariant: one more clause than connector
    pub fn arity_ok(&self) -> bool {
        !self.clauses.is_empty() && self.clauses.len() == self.connectors.len() + 1
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }
}
