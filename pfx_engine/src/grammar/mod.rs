//! Filter-expression grammar: operators, connectors, and clause AST
//!
//! Informal grammar for the accepted language:
//!
//! ```text
//! expression := clause ( CONNECTOR clause )*
//! clause     := OPERAND WS OPERATOR WS (VALUE | SET)
//! SET        := '(' VALUE (',' VALUE)* ')'   -- brackets may be (), [], or {}
//! CONNECTOR  := 'and' | 'or'                            (case-insensitive)
//! OPERATOR   := 'lt'|'gt'|'le'|'ge'|'eq'|'ne'|'in'      (case-insensitive)
//! ```

pub mod ast;
pub mod connectors;
pub mod operators;

pub use ast::{Clause, ParsedExpression};
pub use connectors::Connector;
pub use operators::Operator;
