//! Evaluation pipeline (tokenize -> build clauses -> evaluate -> compose)
//!
//! The whole pipeline is a pure, synchronous computation over immutable
//! inputs: one expression string and one fully populated placeholder map in,
//! one boolean out. No I/O, no shared mutable state, no cancellation;
//! concurrent evaluations need no coordination.

mod error;
mod result;

// Re-export public types
pub use error::EngineError;
pub use result::EvaluationReport;

use crate::config::EnginePreferences;
use crate::log_debug;
use crate::logging::LogEvent;
use crate::placeholder::PlaceholderMap;
use std::time::Instant;

/// Evaluate a filter expression against placeholder values
pub fn evaluate_expression(
    text: &str,
    placeholders: &PlaceholderMap,
) -> Result<bool, EngineError> {
    evaluate_expression_detailed(text, placeholders).map(|report| report.value)
}

/// Evaluate with default preferences, returning the detailed report
pub fn evaluate_expression_detailed(
    text: &str,
    placeholders: &PlaceholderMap,
) -> Result<EvaluationReport, EngineError> {
    evaluate_expression_with_preferences(text, placeholders, &EnginePreferences::default())
}

/// Evaluate with custom runtime preferences
pub fn evaluate_expression_with_preferences(
    text: &str,
    placeholders: &PlaceholderMap,
    preferences: &EnginePreferences,
) -> Result<EvaluationReport, EngineError> {
    let start_time = Instant::now();

    let outcome = run_pipeline(text, placeholders, preferences, start_time);
    if let Err(ref err) = outcome {
        crate::logging::log_event(error_event(err, text, preferences));
    }
    outcome
}

/// Build the error log event, attaching the span only when preferred
fn error_event(err: &EngineError, text: &str, preferences: &EnginePreferences) -> LogEvent {
    let mut event =
        LogEvent::error(err.error_code(), &err.to_string()).with_context("expression", text);
    if preferences.include_spans_in_errors {
        if let Some(span) = err.span() {
            event = event.with_span(span);
        }
    }
    event
}

fn run_pipeline(
    text: &str,
    placeholders: &PlaceholderMap,
    preferences: &EnginePreferences,
    start_time: Instant,
) -> Result<EvaluationReport, EngineError> {
    // Stage 1: Tokenization
    let mut analyzer = crate::lexical::create_analyzer_with_preferences(preferences.clone());
    let tokens = analyzer.tokenize(text)?;

    // Stage 2: Clause building
    let parsed = crate::syntax::parse_clauses(&tokens, placeholders)?;

    // Stage 3: Typed per-clause evaluation
    let mut clause_results = Vec::with_capacity(parsed.clause_count());
    for clause in &parsed.clauses {
        let result = crate::evaluation::evaluate_clause(clause)?;
        if preferences.log_clause_results {
            log_debug!("Clause evaluated",
                "clause" => clause,
                "result" => result
            );
        }
        clause_results.push(result);
    }

    // Stage 4: Boolean composition over the ordered connector sequence
    let value = crate::evaluation::compose(&clause_results, &parsed.connectors)?;

    let report = EvaluationReport::new(
        value,
        clause_results,
        parsed.connector_count(),
        start_time.elapsed(),
    );
    report.log_success(text);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::EvalError;
    use crate::lexical::LexerError;
    use crate::placeholder::{PlaceholderValue, ValueType};
    use crate::syntax::SyntaxError;
    use assert_matches::assert_matches;

    /// Placeholder data mirroring a typical employee-facts request
    fn demo_placeholders() -> PlaceholderMap {
        let mut map = PlaceholderMap::new();
        map.insert(
            "EMP_DEPARTMENT".to_string(),
            PlaceholderValue::new("EMP_DEPARTMENT", "1111", ValueType::Integer),
        );
        map.insert(
            "EMP_HIRE_DATE".to_string(),
            PlaceholderValue::new("EMP_HIRE_DATE", "2022-07-06T14:20", ValueType::Date),
        );
        map.insert(
            "EMP_ABCD".to_string(),
            PlaceholderValue::new("EMP_ABCD", "TRUE", ValueType::Boolean),
        );
        map.insert(
            "EMP_STRING".to_string(),
            PlaceholderValue::new("EMP_STRING", "Jozef", ValueType::String),
        );
        map.insert(
            "AGE".to_string(),
            PlaceholderValue::new("AGE", "31", ValueType::Integer),
        );
        map
    }

    #[test]
    fn test_demo_expression_end_to_end() {
        let expression = "EMP_DEPARTMENT IN (1111,2222) AND EMP_HIRE_DATE EQ 2022-07-06T14:20 \
                          and EMP_ABCD EQ TRUE AND EMP_STRING EQ Jozef";
        assert!(evaluate_expression(expression, &demo_placeholders()).unwrap());
    }

    #[test]
    fn test_single_clause_round_trip() {
        let mut map = PlaceholderMap::new();
        map.insert(
            "DEPT".to_string(),
            PlaceholderValue::new("DEPT", "100", ValueType::Integer),
        );
        assert!(evaluate_expression("DEPT eq 100", &map).unwrap());

        map.insert(
            "DEPT".to_string(),
            PlaceholderValue::new("DEPT", "99", ValueType::Integer),
        );
        assert!(!evaluate_expression("DEPT eq 100", &map).unwrap());
    }

    #[test]
    fn test_precedence_over_real_clauses() {
        // AGE=31: (false AND true) OR true = true
        let expression = "AGE lt 10 and AGE gt 20 or AGE eq 31";
        assert!(evaluate_expression(expression, &demo_placeholders()).unwrap());

        // true OR (false AND false) = true; the OR must not be reordered
        let expression = "AGE eq 31 or AGE lt 10 and AGE gt 100";
        assert!(evaluate_expression(expression, &demo_placeholders()).unwrap());
    }

    #[test]
    fn test_unknown_operand_never_silently_false() {
        let result = evaluate_expression("NOT_A_FACT eq 1", &demo_placeholders());
        assert_matches!(
            result,
            Err(EngineError::Syntax(SyntaxError::UnknownOperand { ref name, .. }))
                if name == "NOT_A_FACT"
        );
    }

    fn preferences(include_spans_in_errors: bool) -> EnginePreferences {
        EnginePreferences {
            log_clause_results: false,
            include_spans_in_errors,
            collect_metrics: true,
        }
    }

    #[test]
    fn test_error_event_span_honors_preference() {
        let err = evaluate_expression_with_preferences(
            "MISSING eq 1",
            &demo_placeholders(),
            &preferences(true),
        )
        .unwrap_err();

        let event = error_event(&err, "MISSING eq 1", &preferences(true));
        assert_eq!(event.span, Some(crate::utils::Span::new(0, 7)));
        assert_eq!(event.context.get("expression").map(String::as_str), Some("MISSING eq 1"));

        let event = error_event(&err, "MISSING eq 1", &preferences(false));
        assert_eq!(event.span, None);
    }

    #[test]
    fn test_unknown_operator_is_parse_error() {
        assert_matches!(
            evaluate_expression("AGE like 31", &demo_placeholders()),
            Err(EngineError::Syntax(SyntaxError::UnknownOperator { .. }))
        );
    }

    #[test]
    fn test_date_in_rejected() {
        assert_matches!(
            evaluate_expression(
                "EMP_HIRE_DATE in (2022-07-06T14:20)",
                &demo_placeholders()
            ),
            Err(EngineError::Evaluation(EvalError::UnsupportedOperator {
                value_type: ValueType::Date,
                ..
            }))
        );
    }

    #[test]
    fn test_empty_set_rejected_at_parse() {
        assert_matches!(
            evaluate_expression("EMP_DEPARTMENT in ()", &demo_placeholders()),
            Err(EngineError::Syntax(SyntaxError::EmptyValueSet { .. }))
        );
    }

    #[test]
    fn test_blank_expression_rejected() {
        assert_matches!(
            evaluate_expression("  ", &demo_placeholders()),
            Err(EngineError::Lexical(LexerError::EmptyExpression))
        );
    }

    #[test]
    fn test_detailed_report() {
        let report = evaluate_expression_detailed(
            "AGE gt 30 and EMP_STRING eq jozef",
            &demo_placeholders(),
        )
        .unwrap();
        assert!(report.value);
        assert_eq!(report.clause_results, vec![true, true]);
        assert_eq!(report.clause_count, 2);
        assert_eq!(report.connector_count, 1);
    }

    #[test]
    fn test_string_in_case_insensitive_end_to_end() {
        let mut map = demo_placeholders();
        map.insert(
            "NAME".to_string(),
            PlaceholderValue::new("NAME", "alice", ValueType::String),
        );
        assert!(evaluate_expression("NAME in (Alice,Bob)", &map).unwrap());
        assert!(!evaluate_expression("NAME in (Carol,Dave)", &map).unwrap());
    }

    #[test]
    fn test_failure_aborts_whole_request() {
        // Second clause fails; no partial boolean surfaces
        let result = evaluate_expression(
            "AGE gt 30 and EMP_STRING gt Jozef",
            &demo_placeholders(),
        );
        assert_matches!(
            result,
            Err(EngineError::Evaluation(EvalError::UnsupportedOperator { .. }))
        );
    }
}
