//! Query design state.
//!
//! A [`QueryDesign`] is what an interactive front end accumulates while the
//! user places tables, ticks columns and draws joins: placed tables in
//! placement order, a checkbox per column, and the connections between
//! columns. It is plain data; turning it into SQL goes through
//! [`QueryDesign::to_generator`], which feeds a fresh [`SqlGenerator`] in a
//! fixed order (anchor, selections, joins).

use tracing::debug;

use crate::error::DesignError;
use crate::generator::{JoinEdge, SqlGenerator};

/// A table placed in the design with its column checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTable {
    /// Table name.
    pub name: String,
    /// Columns in schema order, each with its selection state.
    pub columns: Vec<(String, bool)>,
}

impl PlacedTable {
    fn new(name: &str, columns: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.into_iter().map(|c| (c, false)).collect(),
        }
    }

    /// Returns the checked columns in schema order.
    #[must_use]
    pub fn selected(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|(name, _)| name == column)
    }
}

/// The first half of a two-click join gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConnection {
    /// Table the connection starts from.
    pub table: String,
    /// Column the connection starts from.
    pub column: String,
}

/// Tables, column selections and joins for one query.
#[derive(Debug, Clone, Default)]
pub struct QueryDesign {
    tables: Vec<PlacedTable>,
    connections: Vec<JoinEdge>,
    pending: Option<PendingConnection>,
}

impl QueryDesign {
    /// Creates an empty design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a table with its columns.
    ///
    /// The first placed table is the anchor. Placing a table again replaces
    /// its columns and clears its selection but keeps its position.
    pub fn add_table<I, S>(&mut self, name: &str, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = PlacedTable::new(name, columns.into_iter().map(Into::into).collect());
        match self.tables.iter_mut().find(|t| t.name == name) {
            Some(existing) => *existing = table,
            None => {
                debug!(table = %name, "Placed table");
                self.tables.push(table);
            }
        }
    }

    /// Checks or unchecks a column.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownTable`] or
    /// [`DesignError::UnknownColumn`] if the column is not in the design.
    pub fn select_column(
        &mut self,
        table: &str,
        column: &str,
        checked: bool,
    ) -> Result<(), DesignError> {
        let placed = self.table_mut(table)?;
        let slot = placed
            .columns
            .iter_mut()
            .find(|(name, _)| name == column)
            .ok_or_else(|| DesignError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        slot.1 = checked;
        Ok(())
    }

    /// Starts a connection from `table.column`, replacing any pending one.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is not in the design.
    pub fn start_connection(&mut self, table: &str, column: &str) -> Result<(), DesignError> {
        self.check_column(table, column)?;
        self.pending = Some(PendingConnection {
            table: table.to_string(),
            column: column.to_string(),
        });
        Ok(())
    }

    /// Completes the pending connection at `table.column`.
    ///
    /// Returns `Ok(None)` when nothing is pending, or when the target is the
    /// start table or is not in the design; the pending start is dropped in
    /// the latter two cases. Otherwise the new edge is recorded and returned.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownColumn`] if the target table is placed
    /// but does not have `column`.
    pub fn complete_connection(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Option<JoinEdge>, DesignError> {
        let Some(start) = self.pending.take() else {
            return Ok(None);
        };
        if start.table == table || self.table(table).is_none() {
            debug!(table = %table, "Cancelled connection");
            return Ok(None);
        }
        self.check_column(table, column)?;

        let edge = JoinEdge::new(start.table, start.column, table, column);
        debug!(join = %edge, "Connected columns");
        self.connections.push(edge.clone());
        Ok(Some(edge))
    }

    /// Records a connection directly.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::SelfJoin`] if both ends are the same table, or
    /// an unknown-table/column error if either end is not in the design.
    pub fn connect(
        &mut self,
        source_table: &str,
        source_column: &str,
        target_table: &str,
        target_column: &str,
    ) -> Result<&JoinEdge, DesignError> {
        if source_table == target_table {
            return Err(DesignError::SelfJoin(source_table.to_string()));
        }
        self.check_column(source_table, source_column)?;
        self.check_column(target_table, target_column)?;
        self.connections.push(JoinEdge::new(
            source_table,
            source_column,
            target_table,
            target_column,
        ));
        Ok(&self.connections[self.connections.len() - 1])
    }

    /// Returns the pending connection start, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingConnection> {
        self.pending.as_ref()
    }

    /// Returns the anchor table.
    #[must_use]
    pub fn main_table(&self) -> Option<&str> {
        self.tables.first().map(|t| t.name.as_str())
    }

    /// Returns the placed tables in placement order.
    #[must_use]
    pub fn tables(&self) -> &[PlacedTable] {
        &self.tables
    }

    /// Returns a placed table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&PlacedTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Returns the connections in the order they were drawn.
    #[must_use]
    pub fn connections(&self) -> &[JoinEdge] {
        &self.connections
    }

    /// Removes every table and connection.
    pub fn clear(&mut self) {
        self.tables.clear();
        self.connections.clear();
        self.pending = None;
    }

    /// Builds a generator holding this design.
    ///
    /// Tables without a checked column are not passed as selections.
    #[must_use]
    pub fn to_generator(&self) -> SqlGenerator {
        let mut generator = SqlGenerator::new();
        if let Some(main) = self.main_table() {
            generator.set_main_table(main);
        }
        for table in &self.tables {
            let selected = table.selected();
            if !selected.is_empty() {
                generator.add_selected_columns(&table.name, selected);
            }
        }
        for edge in &self.connections {
            generator.add_join(
                &edge.source_table,
                &edge.target_table,
                &edge.source_column,
                &edge.target_column,
            );
        }
        generator
    }

    /// Generates the statement for this design.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::NoTables`] for an empty design, otherwise any
    /// [`GenerateError`](crate::GenerateError) from the generator.
    pub fn generate_sql(&self) -> Result<String, DesignError> {
        if self.tables.is_empty() {
            return Err(DesignError::NoTables);
        }
        Ok(self.to_generator().generate_sql()?)
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut PlacedTable, DesignError> {
        self.tables
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| DesignError::UnknownTable(name.to_string()))
    }

    fn check_column(&self, table: &str, column: &str) -> Result<(), DesignError> {
        let placed = self
            .table(table)
            .ok_or_else(|| DesignError::UnknownTable(table.to_string()))?;
        if placed.has_column(column) {
            Ok(())
        } else {
            Err(DesignError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
        }
    }
}
