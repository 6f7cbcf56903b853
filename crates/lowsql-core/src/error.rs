//! Error types for statement generation and query design.

use thiserror::Error;

/// Reasons a statement cannot be generated.
///
/// Both are reported before any SQL is assembled and leave the generator
/// untouched, so the caller can fix the state and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No anchor table has been set.
    #[error("no main table set; add a table first")]
    NoMainTable,

    /// No table contributes a column to the SELECT list.
    #[error("no columns selected; select at least one column")]
    NoColumnsSelected,
}

/// Errors raised while editing a [`QueryDesign`](crate::design::QueryDesign).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The design contains no tables.
    #[error("no tables in the design; add a table first")]
    NoTables,

    /// A table that was never added to the design.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// A column not listed for its table.
    #[error("unknown column: {table}.{column}")]
    UnknownColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// A join whose source and target are the same table.
    #[error("cannot join table '{0}' to itself")]
    SelfJoin(String),

    /// Statement generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
