//! Clause builder
//!
//! Turns tokenized clause segments into structured [`Clause`]s: resolves the
//! operand name against the placeholder map, looks up the operator token,
//! and classifies the value expression as a single value or a bracketed
//! literal set.

use crate::config::constants::compile_time::syntax::*;
use crate::grammar::{Clause, Operator, ParsedExpression};
use crate::lexical::{Segment, TokenizedExpression};
use crate::placeholder::PlaceholderMap;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::utils::Span;
use crate::{log_debug, log_success};

/// Characters stripped from a bracketed value set before splitting on commas
const BRACKET_CHARS: &[char] = &['(', ')', '[', ']', '{', '}'];

/// Parse raw expression text into clauses and connectors.
///
/// Convenience wrapper: tokenizes first, then builds each clause.
pub fn parse_expression(
    text: &str,
    placeholders: &PlaceholderMap,
) -> SyntaxResult<ParsedExpression> {
    let tokens = crate::lexical::tokenize_expression(text)?;
    parse_clauses(&tokens, placeholders)
}

/// Build structured clauses from tokenizer output
pub fn parse_clauses(
    tokens: &TokenizedExpression,
    placeholders: &PlaceholderMap,
) -> SyntaxResult<ParsedExpression> {
    let mut clauses = Vec::with_capacity(tokens.segments.len());
    for segment in &tokens.segments {
        clauses.push(build_clause(segment, placeholders)?);
    }

    let parsed = ParsedExpression::new(clauses, tokens.connectors.clone());
    if !parsed.arity_ok() {
        // Tokenizer guarantees this; reaching here is an internal fault
        return Err(SyntaxError::malformed_expression(&format!(
            "{} clauses with {} connectors",
            parsed.clause_count(),
            parsed.connector_count()
        )));
    }

    log_success!(
        crate::logging::codes::success::EXPRESSION_PARSED,
        "Expression parsed into clauses",
        "clauses" => parsed.clause_count(),
        "connectors" => parsed.connector_count()
    );

    Ok(parsed)
}

/// Build one clause from a segment.
///
/// The segment splits into exactly three logical fields: operand, operator
/// token, and value expression. Everything after the operator token belongs
/// to the value expression verbatim, so a bracketed set may contain spaces.
pub fn build_clause(segment: &Segment, placeholders: &PlaceholderMap) -> SyntaxResult<Clause> {
    let mut fields = segment.text.splitn(3, ' ');
    let (operand_name, operator_token, value_expr) =
        match (fields.next(), fields.next(), fields.next()) {
            (Some(operand), Some(operator), Some(value)) if !value.is_empty() => {
                (operand, operator, value)
            }
            _ => return Err(SyntaxError::incomplete_clause(&segment.text, segment.span)),
        };

    let operand_span = Span::new(segment.span.start, segment.span.start + operand_name.len());
    if operand_name.len() > MAX_OPERAND_LENGTH {
        return Err(SyntaxError::OperandTooLong {
            length: operand_name.len(),
            span: operand_span,
        });
    }

    let operand = placeholders
        .get(operand_name)
        .ok_or_else(|| SyntaxError::unknown_operand(operand_name, operand_span))?;

    let operator_span = Span::new(
        operand_span.end + 1,
        operand_span.end + 1 + operator_token.len(),
    );
    let operator = Operator::lookup(&operator_token.to_lowercase())
        .ok_or_else(|| SyntaxError::unknown_operator(operator_token, operator_span))?;

    let value_span = Span::new(operator_span.end + 1, segment.span.end);
    let set_valued = crate::validation::is_balanced(value_expr)
        && crate::validation::contains_bracket_pair(value_expr);

    let (single_value, value_set) = if set_valued {
        let elements: Vec<String> = value_expr
            .replace(BRACKET_CHARS, "")
            .split(',')
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .map(str::to_string)
            .collect();

        if elements.is_empty() {
            return Err(SyntaxError::EmptyValueSet { span: value_span });
        }
        if elements.len() > MAX_SET_ELEMENTS {
            return Err(SyntaxError::ValueSetTooLarge {
                count: elements.len(),
                span: value_span,
            });
        }
        (None, elements)
    } else {
        (Some(value_expr.to_string()), Vec::new())
    };

    // IN requires the set form; every other operator the single form
    if (operator == Operator::In) != set_valued {
        return Err(SyntaxError::OperatorValueMismatch {
            operator,
            set_valued,
            span: value_span,
        });
    }

    let clause = Clause {
        source_text: segment.text.clone(),
        span: segment.span,
        operand: operand.clone(),
        operator,
        single_value,
        value_set,
        value_type: operand.value_type,
    };

    if !crate::validation::is_complete(&clause) {
        return Err(SyntaxError::invalid_clause(&clause.source_text));
    }

    log_debug!("Clause built",
        "operand" => clause.operand.name,
        "operator" => clause.operator,
        "set_valued" => clause.is_set_valued()
    );

    Ok(clause)
}
