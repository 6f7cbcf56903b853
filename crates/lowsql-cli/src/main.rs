//! lowsql CLI
//!
//! Browses a schema fixture and generates LEFT JOIN statements.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use lowsql_cli::{
    CliError, GenerateRequest, load_schema, render_columns, render_databases, render_tables,
};

/// Generate SELECT ... LEFT JOIN statements from tables, columns and joins.
#[derive(Parser)]
#[command(name = "lowsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON schema fixture describing databases, tables and columns.
    #[arg(short, long, env = "LOWSQL_SCHEMA")]
    schema: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List databases.
    Databases,

    /// List the tables of a database with their comments.
    Tables {
        /// Database name.
        database: String,
    },

    /// List the columns of a table with their types and comments.
    Columns {
        /// Database name.
        database: String,
        /// Table name.
        table: String,
    },

    /// Generate a statement.
    Generate {
        /// Anchor table for the FROM clause.
        #[arg(short, long = "main")]
        main_table: String,

        /// Columns to project, as table:col1,col2 (repeatable).
        #[arg(short = 'c', long = "select")]
        selects: Vec<String>,

        /// Join edge, as source_table.column=target_table.column (repeatable).
        #[arg(short, long = "join")]
        joins: Vec<String>,

        /// Check every name against this database of the schema first.
        #[arg(short, long)]
        database: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Databases => {
            let schema = load_schema(cli.schema.as_deref().ok_or(CliError::MissingSchema)?)?;
            print!("{}", render_databases(&schema)?);
        }

        Commands::Tables { database } => {
            let schema = load_schema(cli.schema.as_deref().ok_or(CliError::MissingSchema)?)?;
            print!("{}", render_tables(&schema, &database)?);
        }

        Commands::Columns { database, table } => {
            let schema = load_schema(cli.schema.as_deref().ok_or(CliError::MissingSchema)?)?;
            print!("{}", render_columns(&schema, &database, &table)?);
        }

        Commands::Generate {
            main_table,
            selects,
            joins,
            database,
        } => {
            let request = GenerateRequest::parse(&main_table, &selects, &joins)?;
            debug!(
                main = %request.main_table,
                selections = request.selections.len(),
                joins = request.joins.len(),
                "Parsed generate request"
            );

            match (&cli.schema, &database) {
                (Some(path), Some(database)) => {
                    let schema = load_schema(path)?;
                    request.check(&schema, database)?;
                }
                (None, Some(_)) => return Err(CliError::MissingSchema.into()),
                _ => info!("No schema check requested."),
            }

            let sql = request.to_generator().generate_sql()?;
            println!("{sql}");
        }
    }

    Ok(())
}
