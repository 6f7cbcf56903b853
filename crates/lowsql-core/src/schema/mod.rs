//! Schema provider capability.
//!
//! The generator only consumes plain table and column names. Whatever
//! supplies those names (a live MySQL connection, a fixture file, a test
//! double) implements [`SchemaProvider`]; the calling application queries
//! it and passes the results on. The core ships only the in-memory
//! [`StaticSchema`] so it stays driver-agnostic.

mod error;
mod memory;
mod model;

pub use error::SchemaError;
pub use memory::StaticSchema;
pub use model::{ColumnSchema, DatabaseSchema, SchemaDocument, TableSchema};

/// Supplies database, table and column metadata.
///
/// Lookups by table alone (`column_type`, `column_comment`) resolve against
/// the database most recently passed to
/// [`list_tables`](Self::list_tables) or
/// [`list_columns`](Self::list_columns), the way a connection's current
/// database works. They return an empty string when nothing matches.
pub trait SchemaProvider {
    /// Error type for provider failures.
    type Error: std::error::Error;

    /// Lists the databases visible to the provider.
    fn list_databases(&self) -> Result<Vec<String>, Self::Error>;

    /// Lists the tables of `database`.
    fn list_tables(&self, database: &str) -> Result<Vec<String>, Self::Error>;

    /// Lists the columns of `database.table` in declaration order.
    fn list_columns(&self, database: &str, table: &str) -> Result<Vec<String>, Self::Error>;

    /// Returns the declared type of a column in the current database.
    fn column_type(&self, table: &str, column: &str) -> String;

    /// Returns the comment of a column in the current database.
    fn column_comment(&self, table: &str, column: &str) -> String;

    /// Returns the comment of `database.table`.
    fn table_comment(&self, database: &str, table: &str) -> String;

    /// Releases the provider. Later calls may fail.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
