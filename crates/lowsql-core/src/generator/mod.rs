//! Incremental SQL statement generator.
//!
//! [`SqlGenerator`] accepts the anchor table, per-table column selections
//! and join edges in any order and assembles one
//! `SELECT ... FROM ... LEFT JOIN ...;` statement on demand.
//!
//! Every table gets an alias (`t1`, `t2`, ...) the first time any of
//! [`set_main_table`](SqlGenerator::set_main_table),
//! [`add_selected_columns`](SqlGenerator::add_selected_columns) or
//! [`add_join`](SqlGenerator::add_join) sees it. SELECT fragments are
//! emitted table by table in that same registration order.
//!
//! # Example
//!
//! ```rust
//! use lowsql_core::SqlGenerator;
//!
//! let mut generator = SqlGenerator::new();
//! generator.set_main_table("users");
//! generator.add_selected_columns("users", ["id"]);
//! generator.add_join("users", "orders", "id", "user_id");
//! generator.add_selected_columns("orders", ["total"]);
//!
//! assert_eq!(
//!     generator.generate_sql().unwrap(),
//!     "SELECT t1.id, t2.total FROM users t1 LEFT JOIN orders t2 ON t1.id = t2.user_id;"
//! );
//! ```

mod alias;
mod join;

use std::collections::HashMap;

use tracing::debug;

use crate::builder::Select;
use crate::error::{GenerateError, Result};

pub use alias::{AliasTable, ALIAS_PREFIX};
pub use join::JoinEdge;

/// Accumulates one query and renders it as a LEFT JOIN statement.
///
/// The generator is a single-owner value: it performs no I/O and holds no
/// reference to any connection or UI state.
#[derive(Debug, Clone, Default)]
pub struct SqlGenerator {
    main_table: Option<String>,
    selected: HashMap<String, Vec<String>>,
    joins: Vec<JoinEdge>,
    aliases: AliasTable,
}

impl SqlGenerator {
    /// Creates an empty generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table of the FROM clause.
    ///
    /// Replaces any previous anchor. Aliases already assigned are kept; an
    /// empty name clears the anchor.
    pub fn set_main_table(&mut self, table: &str) {
        if table.is_empty() {
            self.main_table = None;
            return;
        }
        self.aliases.register(table);
        self.main_table = Some(table.to_string());
    }

    /// Sets the columns projected from `table`, replacing any earlier list.
    ///
    /// An empty list registers the table but adds nothing to the SELECT list.
    pub fn add_selected_columns<I, S>(&mut self, table: &str, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.register(table);
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        debug!(table = %table, count = columns.len(), "Selected columns");
        self.selected.insert(table.to_string(), columns);
    }

    /// Appends a LEFT JOIN of `target_table` on
    /// `source_table.source_column = target_table.target_column`.
    ///
    /// A source table that was never registered gets an alias here, before
    /// the target, so no join is ever rendered with a missing alias.
    /// Identical edges are not deduplicated.
    pub fn add_join(
        &mut self,
        source_table: &str,
        target_table: &str,
        source_column: &str,
        target_column: &str,
    ) {
        self.aliases.register(source_table);
        self.aliases.register(target_table);
        let edge = JoinEdge::new(source_table, source_column, target_table, target_column);
        debug!(join = %edge, "Added join");
        self.joins.push(edge);
    }

    /// Assembles the statement.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoMainTable`] if no anchor is set and
    /// [`GenerateError::NoColumnsSelected`] if no table contributes a
    /// column. State is unchanged either way.
    pub fn generate_sql(&self) -> Result<String> {
        let main_table = self.main_table.as_deref().ok_or(GenerateError::NoMainTable)?;

        let columns = self.select_list();
        if columns.is_empty() {
            return Err(GenerateError::NoColumnsSelected);
        }

        let mut select = Select::new()
            .columns(columns)
            .from(main_table, self.alias_or_empty(main_table));

        for edge in &self.joins {
            let source_alias = self.alias_or_empty(&edge.source_table);
            let target_alias = self.alias_or_empty(&edge.target_table);
            select = select.left_join(
                &edge.target_table,
                target_alias,
                &edge.on_clause(source_alias, target_alias),
            );
        }

        let sql = select.build_statement();
        debug!(sql = %sql, "Generated statement");
        Ok(sql)
    }

    /// Returns the anchor table, if set.
    #[must_use]
    pub fn main_table(&self) -> Option<&str> {
        self.main_table.as_deref()
    }

    /// Returns the alias assigned to `table`.
    #[must_use]
    pub fn alias_of(&self, table: &str) -> Option<&str> {
        self.aliases.get(table)
    }

    /// Returns the alias table.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Returns the recorded joins in insertion order.
    #[must_use]
    pub fn joins(&self) -> &[JoinEdge] {
        &self.joins
    }

    /// Returns the column list recorded for `table`.
    #[must_use]
    pub fn selected_columns(&self, table: &str) -> Option<&[String]> {
        self.selected.get(table).map(Vec::as_slice)
    }

    /// Clears all state so the generator can build another statement.
    pub fn reset(&mut self) {
        self.main_table = None;
        self.selected.clear();
        self.joins.clear();
        self.aliases.clear();
    }

    fn select_list(&self) -> Vec<String> {
        let mut list = Vec::new();
        for (table, alias) in self.aliases.iter() {
            if let Some(columns) = self.selected.get(table) {
                list.extend(columns.iter().map(|column| format!("{alias}.{column}")));
            }
        }
        list
    }

    // Every table reaching generation was registered on the way in.
    fn alias_or_empty(&self, table: &str) -> &str {
        self.aliases.get(table).unwrap_or_default()
    }
}
