//! Schema provider errors.

use thiserror::Error;

/// Errors returned by [`StaticSchema`](super::StaticSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The database does not exist.
    #[error("unknown database: {0}")]
    UnknownDatabase(String),

    /// The table does not exist in the database.
    #[error("unknown table: {database}.{table}")]
    UnknownTable {
        /// Database name.
        database: String,
        /// Table name.
        table: String,
    },

    /// The provider was used after `close()`.
    #[error("schema provider is closed")]
    Closed,

    /// The schema document could not be parsed.
    #[error("invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),
}
