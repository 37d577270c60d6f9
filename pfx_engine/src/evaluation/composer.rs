//! Boolean composition over the ordered connector sequence
//!
//! Joins per-clause booleans with the connectors in their original textual
//! order and reduces to one final boolean with AND binding tighter than OR:
//! the stream is split at OR boundaries into groups, each group is
//! AND-reduced, and the group results are OR-reduced.

use crate::evaluation::error::ComposeError;
use crate::grammar::Connector;

/// Reduce clause results and connectors to the final boolean
pub fn compose(results: &[bool], connectors: &[Connector]) -> Result<bool, ComposeError> {
    if results.is_empty() || results.len() != connectors.len() + 1 {
        return Err(ComposeError::ArityMismatch {
            results: results.len(),
            connectors: connectors.len(),
        });
    }

    let mut any_group_true = false;
    let mut group = results[0];

    for (connector, &result) in connectors.iter().zip(&results[1..]) {
        match connector {
            Connector::And => group = group && result,
            Connector::Or => {
                any_group_true = any_group_true || group;
                group = result;
            }
        }
    }

    Ok(any_group_true || group)
}
