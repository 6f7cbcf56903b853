//! In-memory schema provider.

use std::cell::RefCell;

use tracing::debug;

use super::error::SchemaError;
use super::model::{ColumnSchema, DatabaseSchema, SchemaDocument, TableSchema};
use super::SchemaProvider;

/// A [`SchemaProvider`] over a fixed set of databases.
///
/// Useful for fixtures, tests and offline use. Listing tables or columns
/// switches the current database used by the table-only lookups.
#[derive(Debug, Default)]
pub struct StaticSchema {
    databases: Vec<DatabaseSchema>,
    current: RefCell<Option<String>>,
    closed: bool,
}

impl StaticSchema {
    /// Creates a provider over the given databases.
    #[must_use]
    pub fn new(databases: Vec<DatabaseSchema>) -> Self {
        Self {
            databases,
            current: RefCell::new(None),
            closed: false,
        }
    }

    /// Parses a JSON [`SchemaDocument`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the input is not a valid document.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        debug!(databases = document.databases.len(), "Loaded schema document");
        Ok(Self::new(document.databases))
    }

    /// Returns the database lookups currently resolve against.
    #[must_use]
    pub fn current_database(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Returns whether `close()` has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), SchemaError> {
        if self.closed {
            Err(SchemaError::Closed)
        } else {
            Ok(())
        }
    }

    fn database(&self, name: &str) -> Result<&DatabaseSchema, SchemaError> {
        self.ensure_open()?;
        let database = self
            .databases
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| SchemaError::UnknownDatabase(name.to_string()))?;
        *self.current.borrow_mut() = Some(name.to_string());
        Ok(database)
    }

    fn table_in(&self, database: &str, table: &str) -> Option<&TableSchema> {
        self.databases
            .iter()
            .find(|d| d.name == database)
            .and_then(|d| d.table(table))
    }

    fn current_column(&self, table: &str, column: &str) -> Option<&ColumnSchema> {
        if self.closed {
            return None;
        }
        let current = self.current.borrow();
        let database = current.as_deref()?;
        self.table_in(database, table)?.column(column)
    }
}

impl SchemaProvider for StaticSchema {
    type Error = SchemaError;

    fn list_databases(&self) -> Result<Vec<String>, SchemaError> {
        self.ensure_open()?;
        Ok(self.databases.iter().map(|d| d.name.clone()).collect())
    }

    fn list_tables(&self, database: &str) -> Result<Vec<String>, SchemaError> {
        let db = self.database(database)?;
        Ok(db.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn list_columns(&self, database: &str, table: &str) -> Result<Vec<String>, SchemaError> {
        let db = self.database(database)?;
        let table = db.table(table).ok_or_else(|| SchemaError::UnknownTable {
            database: database.to_string(),
            table: table.to_string(),
        })?;
        Ok(table.columns.iter().map(|c| c.name.clone()).collect())
    }

    fn column_type(&self, table: &str, column: &str) -> String {
        self.current_column(table, column)
            .map(|c| c.data_type.clone())
            .unwrap_or_default()
    }

    fn column_comment(&self, table: &str, column: &str) -> String {
        self.current_column(table, column)
            .map(|c| c.comment.clone())
            .unwrap_or_default()
    }

    fn table_comment(&self, database: &str, table: &str) -> String {
        if self.closed {
            return String::new();
        }
        self.table_in(database, table)
            .map(|t| t.comment.clone())
            .unwrap_or_default()
    }

    fn close(&mut self) -> Result<(), SchemaError> {
        self.closed = true;
        *self.current.get_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> StaticSchema {
        StaticSchema::new(vec![
            DatabaseSchema::new(
                "shop",
                vec![
                    TableSchema::new(
                        "users",
                        vec![
                            ColumnSchema::new("id", "bigint").comment("primary key"),
                            ColumnSchema::new("name", "varchar(64)"),
                        ],
                    )
                    .comment("registered accounts"),
                    TableSchema::new("orders", vec![ColumnSchema::new("user_id", "bigint")]),
                ],
            ),
            DatabaseSchema::new("audit", vec![]),
        ])
    }

    #[test]
    fn test_list_databases() {
        assert_eq!(shop().list_databases().unwrap(), vec!["shop", "audit"]);
    }

    #[test]
    fn test_list_tables_and_columns() {
        let schema = shop();
        assert_eq!(schema.list_tables("shop").unwrap(), vec!["users", "orders"]);
        assert_eq!(
            schema.list_columns("shop", "users").unwrap(),
            vec!["id", "name"]
        );
    }

    #[test]
    fn test_unknown_names() {
        let schema = shop();
        assert!(matches!(
            schema.list_tables("nope"),
            Err(SchemaError::UnknownDatabase(name)) if name == "nope"
        ));
        assert!(matches!(
            schema.list_columns("shop", "nope"),
            Err(SchemaError::UnknownTable { table, .. }) if table == "nope"
        ));
    }

    #[test]
    fn test_column_lookups_follow_current_database() {
        let schema = shop();
        assert_eq!(schema.column_type("users", "id"), "");

        schema.list_tables("shop").unwrap();
        assert_eq!(schema.current_database().as_deref(), Some("shop"));
        assert_eq!(schema.column_type("users", "id"), "bigint");
        assert_eq!(schema.column_comment("users", "id"), "primary key");
        assert_eq!(schema.column_comment("users", "name"), "");

        schema.list_tables("audit").unwrap();
        assert_eq!(schema.column_type("users", "id"), "");
    }

    #[test]
    fn test_table_comment() {
        let schema = shop();
        assert_eq!(schema.table_comment("shop", "users"), "registered accounts");
        assert_eq!(schema.table_comment("shop", "missing"), "");
    }

    #[test]
    fn test_closed_provider() {
        let mut schema = shop();
        schema.list_tables("shop").unwrap();
        schema.close().unwrap();

        assert!(schema.is_closed());
        assert!(matches!(schema.list_databases(), Err(SchemaError::Closed)));
        assert_eq!(schema.column_type("users", "id"), "");
        assert_eq!(schema.table_comment("shop", "users"), "");
    }

    #[test]
    fn test_from_json() {
        let schema = StaticSchema::from_json(
            r#"{"databases":[{"name":"shop","tables":[
                {"name":"users","columns":[{"name":"id","type":"int"}]}]}]}"#,
        )
        .unwrap();
        assert_eq!(schema.list_columns("shop", "users").unwrap(), vec!["id"]);
        assert_eq!(schema.column_type("users", "id"), "int");
    }

    #[test]
    fn test_from_invalid_json() {
        assert!(matches!(
            StaticSchema::from_json("{\"databases\": 3}"),
            Err(SchemaError::Parse(_))
        ));
    }
}
