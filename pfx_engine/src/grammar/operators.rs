//! Canonical comparison operators and reverse lookup
//!
//! Operator tokens are lowercase two-letter words (`lt gt le ge eq ne in`).
//! Lookup is exact against the canonical token; callers normalize case
//! first. A failed lookup is always surfaced as a parse error upstream,
//! never defaulted to a comparison operator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Equals,
    NotEquals,
    In,
}

impl Operator {
    /// All operators, in canonical declaration order
    pub const ALL: [Operator; 7] = [
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanEqual,
        Operator::GreaterThanEqual,
        Operator::Equals,
        Operator::NotEquals,
        Operator::In,
    ];

    /// Canonical lowercase textual token
    pub fn token(&self) -> &'static str {
        match self {
            Operator::LessThan => "lt",
            Operator::GreaterThan => "gt",
            Operator::LessThanEqual => "le",
            Operator::GreaterThanEqual => "ge",
            Operator::Equals => "eq",
            Operator::NotEquals => "ne",
            Operator::In => "in",
        }
    }

    /// Reverse lookup from canonical token
    pub fn lookup(token: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.token() == token)
    }

    /// Ordering operators (`lt gt le ge`) require an ordered value type
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::LessThan
                | Operator::GreaterThan
                | Operator::LessThanEqual
                | Operator::GreaterThanEqual
        )
    }

    /// Equality operators (`eq ne`) are legal for every value type
    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Equals | Operator::NotEquals)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_lookup_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::lookup(op.token()), Some(op));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Operator::lookup("eq"), Some(Operator::Equals));
        // Case normalization is the caller's job
        assert_eq!(Operator::lookup("EQ"), None);
        assert_eq!(Operator::lookup("equals"), None);
        assert_eq!(Operator::lookup(""), None);
    }

    #[test]
    fn test_classification() {
        assert!(Operator::LessThan.is_ordering());
        assert!(Operator::GreaterThanEqual.is_ordering());
        assert!(!Operator::In.is_ordering());
        assert!(Operator::Equals.is_equality());
        assert!(!Operator::In.is_equality());
    }
}
