use std::time::Duration;

/// Detailed evaluation outcome for callers that want more than the boolean
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Final composed boolean
    pub value: bool,
    /// Per-clause results in clause order
    pub clause_results: Vec<bool>,
    pub clause_count: usize,
    pub connector_count: usize,
    pub duration: Duration,
}

impl EvaluationReport {
    pub fn new(value: bool, clause_results: Vec<bool>, connector_count: usize, duration: Duration) -> Self {
        Self {
            value,
            clause_count: clause_results.len(),
            clause_results,
            connector_count,
            duration,
        }
    }

    pub fn log_success(&self, expression: &str) {
        crate::log_success!(
            crate::logging::codes::success::EVALUATION_COMPLETE,
            "Expression evaluation completed",
            "expression" => expression,
            "result" => self.value,
            "clauses" => self.clause_count,
            "duration_us" => self.duration.as_micros()
        );
    }
}
