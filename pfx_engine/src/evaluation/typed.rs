//! Type-aware clause evaluation
//!
//! Dispatches exhaustively on the clause's declared [`ValueType`]; every
//! type/operator combination either computes a boolean or returns a typed
//! error. There is no default-false arm anywhere.

use crate::evaluation::error::{EvalError, EvalResult};
use crate::grammar::{Clause, Operator};
use crate::placeholder::{parse_boolean, parse_date_time, parse_integer, ValueType};

/// Evaluate one clause to a boolean
pub fn evaluate_clause(clause: &Clause) -> EvalResult<bool> {
    match clause.value_type {
        ValueType::Integer => evaluate_integer(clause),
        ValueType::String => evaluate_string(clause),
        ValueType::Date => evaluate_date(clause),
        ValueType::Boolean => evaluate_boolean(clause),
    }
}

/// Comparison value of a single-valued clause.
///
/// Validation guarantees presence; a miss here is an internal fault.
fn single_value(clause: &Clause) -> EvalResult<&str> {
    clause
        .single_value
        .as_deref()
        .ok_or_else(|| EvalError::IncompleteClause {
            source_text: clause.source_text.clone(),
        })
}

fn non_empty_set(clause: &Clause) -> EvalResult<&[String]> {
    if clause.value_set.is_empty() {
        return Err(EvalError::EmptyValueSet);
    }
    Ok(&clause.value_set)
}

fn evaluate_integer(clause: &Clause) -> EvalResult<bool> {
    let operand = parse_integer(&clause.operand.value)?;

    if clause.operator == Operator::In {
        let mut found = false;
        for element in non_empty_set(clause)? {
            if parse_integer(element)? == operand {
                found = true;
            }
        }
        return Ok(found);
    }

    let value = parse_integer(single_value(clause)?)?;
    Ok(match clause.operator {
        Operator::LessThan => operand < value,
        Operator::GreaterThan => operand > value,
        Operator::LessThanEqual => operand <= value,
        Operator::GreaterThanEqual => operand >= value,
        Operator::Equals => operand == value,
        Operator::NotEquals => operand != value,
        Operator::In => unreachable!("handled above"),
    })
}

fn evaluate_string(clause: &Clause) -> EvalResult<bool> {
    let operand = clause.operand.value.as_str();

    match clause.operator {
        Operator::Equals => Ok(operand.eq_ignore_ascii_case(single_value(clause)?)),
        Operator::NotEquals => Ok(!operand.eq_ignore_ascii_case(single_value(clause)?)),
        Operator::In => Ok(non_empty_set(clause)?
            .iter()
            .any(|element| element.eq_ignore_ascii_case(operand))),
        other => Err(EvalError::unsupported_operator(other, ValueType::String)),
    }
}

fn evaluate_date(clause: &Clause) -> EvalResult<bool> {
    if clause.operator == Operator::In {
        return Err(EvalError::unsupported_operator(
            Operator::In,
            ValueType::Date,
        ));
    }

    let operand = parse_date_time(&clause.operand.value)?;
    let value = parse_date_time(single_value(clause)?)?;

    Ok(match clause.operator {
        Operator::LessThan => operand < value,
        Operator::GreaterThan => operand > value,
        // Deliberately < or =, not <=: chronological ordering plus equality
        Operator::LessThanEqual => operand < value || operand == value,
        Operator::GreaterThanEqual => operand > value || operand == value,
        Operator::Equals => operand == value,
        Operator::NotEquals => operand != value,
        Operator::In => unreachable!("rejected above"),
    })
}

fn evaluate_boolean(clause: &Clause) -> EvalResult<bool> {
    match clause.operator {
        Operator::Equals | Operator::NotEquals => {
            let operand = parse_boolean(&clause.operand.value)?;
            let value = parse_boolean(single_value(clause)?)?;
            Ok(if clause.operator == Operator::Equals {
                operand == value
            } else {
                operand != value
            })
        }
        other => Err(EvalError::unsupported_operator(other, ValueType::Boolean)),
    }
}
