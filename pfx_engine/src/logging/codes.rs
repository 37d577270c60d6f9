//! Consolidated error codes and classification system
//!
//! Single source of truth for all engine error and success codes plus their
//! metadata. Stage error enums map into these codes via `error_code()`.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CODE CATALOGS
// ============================================================================

/// Tokenizer error codes
pub mod lexical {
    use super::Code;

    pub const EMPTY_EXPRESSION: Code = Code::new("E001");
    pub const EXPRESSION_TOO_LONG: Code = Code::new("E002");
    pub const DANGLING_CONNECTOR: Code = Code::new("E003");
    pub const TOO_MANY_CLAUSES: Code = Code::new("E004");
}

/// Clause builder error codes
pub mod syntax {
    use super::Code;

    pub const UNKNOWN_OPERAND: Code = Code::new("E010");
    pub const UNKNOWN_OPERATOR: Code = Code::new("E011");
    pub const INCOMPLETE_CLAUSE: Code = Code::new("E012");
    pub const EMPTY_VALUE_SET: Code = Code::new("E013");
    pub const VALUE_SET_TOO_LARGE: Code = Code::new("E014");
    pub const OPERATOR_VALUE_MISMATCH: Code = Code::new("E015");
    pub const INVALID_CLAUSE: Code = Code::new("E016");
    pub const MALFORMED_EXPRESSION: Code = Code::new("E017");
    pub const OPERAND_TOO_LONG: Code = Code::new("E018");
}

/// Typed evaluator and composer error codes
pub mod evaluation {
    use super::Code;

    pub const UNSUPPORTED_OPERATOR: Code = Code::new("E020");
    pub const EMPTY_VALUE_SET: Code = Code::new("E021");
    pub const TYPE_PARSE_ERROR: Code = Code::new("E022");
    pub const ARITY_MISMATCH: Code = Code::new("E023");
}

/// Engine-level error codes
pub mod engine {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("E030");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("S000");
    pub const EVALUATION_COMPLETE: Code = Code::new("S001");
    pub const EXPRESSION_PARSED: Code = Code::new("S002");
}

// ============================================================================
// CODE METADATA
// ============================================================================

/// Metadata for a registered code
#[derive(Debug, Clone, Copy)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

fn metadata_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata {
                code: "E001",
                category: "lexical",
                description: "Expression text is empty or blank",
            },
            CodeMetadata {
                code: "E002",
                category: "lexical",
                description: "Expression text exceeds the maximum length",
            },
            CodeMetadata {
                code: "E003",
                category: "lexical",
                description: "Connector with no clause on one side",
            },
            CodeMetadata {
                code: "E004",
                category: "lexical",
                description: "Expression contains too many clauses",
            },
            CodeMetadata {
                code: "E010",
                category: "syntax",
                description: "Operand name not present in the placeholder map",
            },
            CodeMetadata {
                code: "E011",
                category: "syntax",
                description: "Operator token not in the canonical operator set",
            },
            CodeMetadata {
                code: "E012",
                category: "syntax",
                description: "Clause segment has fewer than three fields",
            },
            CodeMetadata {
                code: "E013",
                category: "syntax",
                description: "Bracketed value set contains no elements",
            },
            CodeMetadata {
                code: "E014",
                category: "syntax",
                description: "Value set exceeds the maximum element count",
            },
            CodeMetadata {
                code: "E015",
                category: "syntax",
                description: "Operator and value form disagree (set vs single)",
            },
            CodeMetadata {
                code: "E016",
                category: "syntax",
                description: "Built clause failed structural validation",
            },
            CodeMetadata {
                code: "E017",
                category: "syntax",
                description: "Clause/connector counts violate the arity invariant",
            },
            CodeMetadata {
                code: "E018",
                category: "syntax",
                description: "Operand identifier exceeds the maximum length",
            },
            CodeMetadata {
                code: "E020",
                category: "evaluation",
                description: "Operator not legal for the clause value type",
            },
            CodeMetadata {
                code: "E021",
                category: "evaluation",
                description: "IN evaluation reached an empty value set",
            },
            CodeMetadata {
                code: "E022",
                category: "evaluation",
                description: "Value text not parseable as the declared type",
            },
            CodeMetadata {
                code: "E023",
                category: "evaluation",
                description: "Result/connector counts disagree during composition",
            },
            CodeMetadata {
                code: "E030",
                category: "engine",
                description: "Internal engine invariant violation",
            },
            CodeMetadata {
                code: "S000",
                category: "success",
                description: "Global logging system initialized",
            },
            CodeMetadata {
                code: "S001",
                category: "success",
                description: "Expression evaluation completed",
            },
            CodeMetadata {
                code: "S002",
                category: "success",
                description: "Expression parsed into clauses",
            },
        ];
        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Look up the human description for a code string
pub fn get_description(code: &str) -> &'static str {
    metadata_registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Look up the category for a code string
pub fn get_category(code: &str) -> &'static str {
    metadata_registry()
        .get(code)
        .map(|m| m.category)
        .unwrap_or("unknown")
}
