// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnginePreferences {
    /// Whether to log each clause result at debug level
    pub log_clause_results: bool,

    /// Whether to include span information in error messages
    pub include_spans_in_errors: bool,

    /// Whether to collect tokenizer metrics during evaluation
    pub collect_metrics: bool,
}

impl Default for EnginePreferences {
    fn default() -> Self {
        Self {
            log_clause_results: env::var("PFX_LOG_CLAUSE_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_spans_in_errors: env::var("PFX_INCLUDE_SPANS_IN_ERRORS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            collect_metrics: env::var("PFX_COLLECT_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
