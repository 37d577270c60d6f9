// Internal modules
pub mod config;
pub mod evaluation;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod placeholder;
pub mod syntax;
pub mod utils;
pub mod validation;

// Re-export key types for library consumers
pub use grammar::{Clause, Connector, Operator, ParsedExpression};
pub use pipeline::{EngineError, EvaluationReport};
pub use placeholder::{PlaceholderMap, PlaceholderValue, ValueType};

// Re-export the evaluation entry points
pub use pipeline::{
    evaluate_expression, evaluate_expression_detailed, evaluate_expression_with_preferences,
};
