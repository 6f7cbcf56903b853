//! SELECT statement builder using the typestate pattern.
//!
//! Only the shape the generator emits is supported: a projection list, one
//! aliased anchor table and any number of LEFT JOINs. `build()` is not
//! callable until both the columns and the FROM clause are set.

use std::marker::PhantomData;

// Typestate markers (zero-sized types)

/// Marker: No columns specified yet.
pub struct NoColumns;
/// Marker: Columns have been specified.
pub struct HasColumns;
/// Marker: No FROM clause specified yet.
pub struct NoFrom;
/// Marker: FROM clause has been specified.
pub struct HasFrom;

/// A SELECT statement builder over aliased tables.
///
/// Identifiers are emitted verbatim; callers pass schema-derived names.
pub struct Select<Cols, From> {
    columns: Vec<String>,
    from: Option<(String, String)>,
    joins: Vec<String>,
    _state: PhantomData<(Cols, From)>,
}

impl Select<NoColumns, NoFrom> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            from: None,
            joins: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl Default for Select<NoColumns, NoFrom> {
    fn default() -> Self {
        Self::new()
    }
}

// Transition: NoColumns -> HasColumns
impl<From> Select<NoColumns, From> {
    /// Specifies the projected expressions, in output order.
    #[must_use]
    pub fn columns<I, S>(self, cols: I) -> Select<HasColumns, From>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Select {
            columns: cols.into_iter().map(Into::into).collect(),
            from: self.from,
            joins: self.joins,
            _state: PhantomData,
        }
    }
}

// Transition: NoFrom -> HasFrom
impl<Cols> Select<Cols, NoFrom> {
    /// Specifies the anchor table and its alias.
    #[must_use]
    pub fn from(self, table: &str, alias: &str) -> Select<Cols, HasFrom> {
        Select {
            columns: self.columns,
            from: Some((String::from(table), String::from(alias))),
            joins: self.joins,
            _state: PhantomData,
        }
    }
}

// Methods available after FROM
impl<Cols> Select<Cols, HasFrom> {
    /// Adds a LEFT JOIN of an aliased table with the given ON predicate.
    #[must_use]
    pub fn left_join(mut self, table: &str, alias: &str, on: &str) -> Self {
        self.joins.push(format!("LEFT JOIN {table} {alias} ON {on}"));
        self
    }
}

impl Select<HasColumns, HasFrom> {
    /// Builds the statement without a terminating semicolon.
    #[must_use]
    pub fn build(self) -> String {
        let mut sql = String::from("SELECT ");
        sql.push_str(&self.columns.join(", "));

        if let Some((ref table, ref alias)) = self.from {
            sql.push_str(" FROM ");
            sql.push_str(table);
            sql.push(' ');
            sql.push_str(alias);
        }

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        sql
    }

    /// Builds the statement terminated by a single `;`.
    #[must_use]
    pub fn build_statement(self) -> String {
        let mut sql = self.build();
        sql.push(';');
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let sql = Select::new()
            .columns(["t1.id", "t1.name"])
            .from("users", "t1")
            .build();

        assert_eq!(sql, "SELECT t1.id, t1.name FROM users t1");
    }

    #[test]
    fn test_from_before_columns() {
        let sql = Select::new()
            .from("users", "t1")
            .columns(vec![String::from("t1.id")])
            .build_statement();

        assert_eq!(sql, "SELECT t1.id FROM users t1;");
    }

    #[test]
    fn test_left_joins_keep_order() {
        let sql = Select::new()
            .columns(["t1.id"])
            .from("users", "t1")
            .left_join("orders", "t2", "t1.id = t2.user_id")
            .left_join("profiles", "t3", "t1.id = t3.user_id")
            .build_statement();

        assert_eq!(
            sql,
            "SELECT t1.id FROM users t1 \
             LEFT JOIN orders t2 ON t1.id = t2.user_id \
             LEFT JOIN profiles t3 ON t1.id = t3.user_id;"
        );
    }

    #[test]
    fn test_no_space_before_semicolon() {
        let sql = Select::new()
            .columns(["t1.id"])
            .from("users", "t1")
            .build_statement();

        assert!(sql.ends_with("t1;"));
        assert_eq!(sql.matches(';').count(), 1);
    }

    // This would fail to compile: SELECT without FROM
    // #[test]
    // fn test_select_without_from_fails() {
    //     let _ = Select::new().columns(["t1.id"]).build();
    // }

    // This would fail to compile: LEFT JOIN before FROM
    // #[test]
    // fn test_join_without_from_fails() {
    //     let _ = Select::new().left_join("orders", "t2", "t1.id = t2.user_id");
    // }
}
