//! Command-line front end for `lowsql-core`.
//!
//! The `lowsql` binary browses a schema fixture and turns `--main`,
//! `--select` and `--join` arguments into a generated statement:
//!
//! ```bash
//! lowsql --schema shop.json tables shop
//! lowsql --schema shop.json columns shop users
//! lowsql generate --main users --select users:id,name \
//!     --join users.id=orders.user_id --select orders:total
//! ```

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use lowsql_core::{GenerateError, JoinEdge, SchemaError, SchemaProvider, SqlGenerator, StaticSchema};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--select` value that is not `table:col1,col2`.
    #[error("invalid --select '{0}': expected table:column[,column...]")]
    InvalidSelect(String),

    /// A `--join` value that is not `source.column=target.column`.
    #[error("invalid --join '{0}': expected source_table.column=target_table.column")]
    InvalidJoin(String),

    /// A command needs `--schema` but none was given.
    #[error("no schema file given; pass --schema or set LOWSQL_SCHEMA")]
    MissingSchema,

    /// A referenced column does not exist in the schema.
    #[error("unknown column {database}.{table}.{column}")]
    UnknownColumn {
        /// Database name.
        database: String,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// Reading the schema file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema provider failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Statement generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Column selection parsed from `table:col1,col2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Table name.
    pub table: String,
    /// Columns in the order given.
    pub columns: Vec<String>,
}

/// Everything `generate` needs, in the order it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Anchor table.
    pub main_table: String,
    /// Column selections.
    pub selections: Vec<Selection>,
    /// Join edges.
    pub joins: Vec<JoinEdge>,
}

impl GenerateRequest {
    /// Parses raw `--select` and `--join` values.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidSelect`] or [`CliError::InvalidJoin`] for
    /// malformed values.
    pub fn parse(main_table: &str, selects: &[String], joins: &[String]) -> Result<Self> {
        Ok(Self {
            main_table: main_table.to_string(),
            selections: selects
                .iter()
                .map(|s| parse_select(s))
                .collect::<Result<_>>()?,
            joins: joins.iter().map(|j| parse_join(j)).collect::<Result<_>>()?,
        })
    }

    /// Feeds the request into a fresh generator: anchor, selections, joins.
    #[must_use]
    pub fn to_generator(&self) -> SqlGenerator {
        let mut generator = SqlGenerator::new();
        generator.set_main_table(&self.main_table);
        for selection in &self.selections {
            generator.add_selected_columns(&selection.table, selection.columns.iter().cloned());
        }
        for edge in &self.joins {
            generator.add_join(
                &edge.source_table,
                &edge.target_table,
                &edge.source_column,
                &edge.target_column,
            );
        }
        generator
    }

    /// Checks every referenced table and column against `provider`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error for unknown tables and
    /// [`CliError::UnknownColumn`] for unknown columns.
    pub fn check<P>(&self, provider: &P, database: &str) -> Result<()>
    where
        P: SchemaProvider,
        CliError: From<P::Error>,
    {
        let mut references: Vec<(&str, &str)> = Vec::new();
        for selection in &self.selections {
            references.extend(
                selection
                    .columns
                    .iter()
                    .map(|c| (selection.table.as_str(), c.as_str())),
            );
        }
        for edge in &self.joins {
            references.push((edge.source_table.as_str(), edge.source_column.as_str()));
            references.push((edge.target_table.as_str(), edge.target_column.as_str()));
        }

        provider.list_columns(database, &self.main_table)?;
        for (table, column) in references {
            let columns = provider.list_columns(database, table)?;
            if !columns.iter().any(|c| c == column) {
                return Err(CliError::UnknownColumn {
                    database: database.to_string(),
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
        debug!(database = %database, "Checked references against schema");
        Ok(())
    }
}

/// Parses `table:col1,col2`. An empty column list is allowed (`table:`).
///
/// # Errors
///
/// Returns [`CliError::InvalidSelect`] if the table or a column is empty.
pub fn parse_select(value: &str) -> Result<Selection> {
    let invalid = || CliError::InvalidSelect(value.to_string());
    let (table, columns) = value.split_once(':').ok_or_else(invalid)?;
    let table = table.trim();
    if table.is_empty() {
        return Err(invalid());
    }
    let columns = columns.trim();
    let columns: Vec<String> = if columns.is_empty() {
        Vec::new()
    } else {
        columns.split(',').map(|c| c.trim().to_string()).collect()
    };
    if columns.iter().any(String::is_empty) {
        return Err(invalid());
    }
    Ok(Selection {
        table: table.to_string(),
        columns,
    })
}

/// Parses `source_table.column=target_table.column`.
///
/// # Errors
///
/// Returns [`CliError::InvalidJoin`] if either side is not `table.column`.
pub fn parse_join(value: &str) -> Result<JoinEdge> {
    let invalid = || CliError::InvalidJoin(value.to_string());
    let (source, target) = value.split_once('=').ok_or_else(invalid)?;
    let (source_table, source_column) = split_qualified(source).ok_or_else(invalid)?;
    let (target_table, target_column) = split_qualified(target).ok_or_else(invalid)?;
    Ok(JoinEdge::new(
        source_table,
        source_column,
        target_table,
        target_column,
    ))
}

fn split_qualified(value: &str) -> Option<(&str, &str)> {
    let (table, column) = value.trim().split_once('.')?;
    if table.is_empty() || column.is_empty() {
        None
    } else {
        Some((table, column))
    }
}

/// Loads a JSON schema fixture.
///
/// # Errors
///
/// Returns an IO or parse error.
pub fn load_schema(path: &Path) -> Result<StaticSchema> {
    let json = std::fs::read_to_string(path)?;
    let schema = StaticSchema::from_json(&json)?;
    info!(path = %path.display(), "Loaded schema");
    Ok(schema)
}

/// Renders one database name per line.
///
/// # Errors
///
/// Returns the provider's error.
pub fn render_databases<P>(provider: &P) -> Result<String>
where
    P: SchemaProvider,
    CliError: From<P::Error>,
{
    Ok(provider
        .list_databases()?
        .iter()
        .map(|d| format!("{d}\n"))
        .collect())
}

/// Renders `table  comment` lines for `database`.
///
/// # Errors
///
/// Returns the provider's error.
pub fn render_tables<P>(provider: &P, database: &str) -> Result<String>
where
    P: SchemaProvider,
    CliError: From<P::Error>,
{
    let mut out = String::new();
    for table in provider.list_tables(database)? {
        let comment = provider.table_comment(database, &table);
        out.push_str(&render_row(&[table.as_str(), comment.as_str()]));
    }
    Ok(out)
}

/// Renders `column  type  comment` lines for `database.table`.
///
/// # Errors
///
/// Returns the provider's error.
pub fn render_columns<P>(provider: &P, database: &str, table: &str) -> Result<String>
where
    P: SchemaProvider,
    CliError: From<P::Error>,
{
    let mut out = String::new();
    for column in provider.list_columns(database, table)? {
        let data_type = provider.column_type(table, &column);
        let comment = provider.column_comment(table, &column);
        out.push_str(&render_row(&[
            column.as_str(),
            data_type.as_str(),
            comment.as_str(),
        ]));
    }
    Ok(out)
}

fn render_row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\t");
    line.push('\n');
    line
}
