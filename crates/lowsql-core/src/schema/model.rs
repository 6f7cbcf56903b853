//! Schema metadata types.

use serde::{Deserialize, Serialize};

/// A column as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Declared SQL type (e.g. `bigint(20)`).
    #[serde(rename = "type", default)]
    pub data_type: String,
    /// Column comment.
    #[serde(default)]
    pub comment: String,
}

impl ColumnSchema {
    /// Creates a column with a type and no comment.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comment: String::new(),
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A table and its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Table comment.
    #[serde(default)]
    pub comment: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Creates a table with the given columns.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            columns,
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A database and its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database name.
    pub name: String,
    /// Tables in listing order.
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl DatabaseSchema {
    /// Creates a database with the given tables.
    #[must_use]
    pub fn new(name: impl Into<String>, tables: Vec<TableSchema>) -> Self {
        Self {
            name: name.into(),
            tables,
        }
    }

    /// Looks up a table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Top-level layout of a JSON schema fixture.
///
/// ```json
/// { "databases": [ { "name": "shop", "tables": [
///     { "name": "users", "comment": "accounts",
///       "columns": [ { "name": "id", "type": "bigint", "comment": "" } ] } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Databases in listing order.
    #[serde(default)]
    pub databases: Vec<DatabaseSchema>,
}
