//! Structural completeness check on built clauses
//!
//! Run by the clause builder immediately after construction; a failure is
//! raised as `SyntaxError::InvalidClause` and aborts the whole evaluation.
//! The evaluator never sees an incomplete clause.

use crate::grammar::{Clause, Operator};

/// True iff the clause is structurally complete: non-empty operand name and
/// exactly one value form populated, consistent with the operator.
pub fn is_complete(clause: &Clause) -> bool {
    if clause.operand.name.is_empty() {
        return false;
    }

    let has_single = clause.single_value.is_some();
    let has_set = !clause.value_set.is_empty();

    match clause.operator {
        Operator::In => has_set && !has_single,
        _ => has_single && !has_set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{PlaceholderValue, ValueType};
    use crate::utils::Span;

    fn clause(operator: Operator, single: Option<&str>, set: Vec<&str>) -> Clause {
        Clause {
            source_text: "DEPT eq 100".to_string(),
            span: Span::dummy(),
            operand: PlaceholderValue::new("DEPT", "100", ValueType::Integer),
            operator,
            single_value: single.map(|s| s.to_string()),
            value_set: set.into_iter().map(|s| s.to_string()).collect(),
            value_type: ValueType::Integer,
        }
    }

    #[test]
    fn test_complete_single_value_clause() {
        assert!(is_complete(&clause(Operator::Equals, Some("100"), vec![])));
    }

    #[test]
    fn test_complete_set_clause() {
        assert!(is_complete(&clause(Operator::In, None, vec!["100", "200"])));
    }

    #[test]
    fn test_missing_value_forms() {
        assert!(!is_complete(&clause(Operator::Equals, None, vec![])));
        assert!(!is_complete(&clause(Operator::In, None, vec![])));
    }

    #[test]
    fn test_operator_value_form_disagreement() {
        // IN needs the set form, everything else the single form
        assert!(!is_complete(&clause(Operator::In, Some("100"), vec![])));
        assert!(!is_complete(&clause(Operator::Equals, None, vec!["100"])));
        // Both populated violates the exactly-one invariant
        assert!(!is_complete(&clause(
            Operator::Equals,
            Some("100"),
            vec!["200"]
        )));
    }

    #[test]
    fn test_empty_operand_name() {
        let mut bad = clause(Operator::Equals, Some("100"), vec![]);
        bad.operand.name.clear();
        assert!(!is_complete(&bad));
    }
}
