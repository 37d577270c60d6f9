//! Logical connectors joining adjacent clauses
//!
//! Connectors are stored only in ordered sequences: clause `i` is joined to
//! clause `i+1` by `connectors[i]`, in the exact order the words appear in
//! the expression text. AND binds tighter than OR during composition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical connector between two adjacent clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Canonical lowercase token
    pub fn token(&self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
        }
    }

    /// Case-insensitive whole-word lookup
    pub fn lookup(word: &str) -> Option<Connector> {
        if word.eq_ignore_ascii_case("and") {
            Some(Connector::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Connector::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
