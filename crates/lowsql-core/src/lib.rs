//! # lowsql-core
//!
//! Builds `SELECT ... LEFT JOIN ...` statements from the pieces a visual
//! query designer collects: an anchor table, the columns ticked on each
//! table, and the joins drawn between columns.
//!
//! This crate provides:
//! - [`SqlGenerator`], an order-independent accumulator with stable
//!   `t1`, `t2`, ... table aliases
//! - [`QueryDesign`], the tables/selections/connections state a front end
//!   edits before generating
//! - [`SchemaProvider`], the seam through which table and column names
//!   reach the application, with the in-memory [`StaticSchema`]
//!
//! ## Generating a statement
//!
//! ```rust
//! use lowsql_core::{GenerateError, SqlGenerator};
//!
//! let mut generator = SqlGenerator::new();
//! assert_eq!(generator.generate_sql(), Err(GenerateError::NoMainTable));
//!
//! generator.set_main_table("users");
//! generator.add_selected_columns("users", ["id", "name"]);
//! assert_eq!(
//!     generator.generate_sql().unwrap(),
//!     "SELECT t1.id, t1.name FROM users t1;"
//! );
//! ```
//!
//! ## Identifiers
//!
//! Table and column names are emitted verbatim. They are expected to come
//! from a [`SchemaProvider`], never from free-form user text.

pub mod builder;
pub mod design;
pub mod error;
pub mod generator;
pub mod schema;

pub use design::QueryDesign;
pub use error::{DesignError, GenerateError};
pub use generator::{AliasTable, JoinEdge, SqlGenerator};
pub use schema::{SchemaError, SchemaProvider, StaticSchema};
