//! Clause evaluation and boolean composition

pub mod composer;
pub mod error;
pub mod typed;

pub use composer::compose;
pub use error::{ComposeError, EvalError, EvalResult};
pub use typed::evaluate_clause;
