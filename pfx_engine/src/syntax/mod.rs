//! Syntax analysis: tokenized segments to structured clauses

pub mod error;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{build_clause, parse_clauses, parse_expression};
