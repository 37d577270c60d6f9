//! Structural validation predicates
//!
//! Pure checks used by the clause builder: bracket balance (set-clause
//! classification) and post-build clause completeness.

pub mod brackets;
pub mod clause;

pub use brackets::{contains_bracket_pair, is_balanced};
pub use clause::is_complete;
