//! Join edges between selected tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed equality predicate `source.source_column = target.target_column`.
///
/// Every edge renders as a LEFT JOIN of the target table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinEdge {
    /// Table already present in the statement.
    pub source_table: String,
    /// Column of the source table.
    pub source_column: String,
    /// Table brought in by the join.
    pub target_table: String,
    /// Column of the target table.
    pub target_column: String,
}

impl JoinEdge {
    /// Creates a new join edge.
    #[must_use]
    pub fn new(
        source_table: impl Into<String>,
        source_column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            source_table: source_table.into(),
            source_column: source_column.into(),
            target_table: target_table.into(),
            target_column: target_column.into(),
        }
    }

    /// Renders the ON predicate using the given aliases.
    #[must_use]
    pub fn on_clause(&self, source_alias: &str, target_alias: &str) -> String {
        format!(
            "{source_alias}.{} = {target_alias}.{}",
            self.source_column, self.target_column
        )
    }
}

impl fmt::Display for JoinEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} = {}.{}",
            self.source_table, self.source_column, self.target_table, self.target_column
        )
    }
}
