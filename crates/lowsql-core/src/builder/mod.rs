//! Statement assembly.
//!
//! The generator collects its state in any order, then hands it to the
//! typestate [`Select`] builder so the clauses always come out in SQL order.
//!
//! # Example
//!
//! ```rust
//! use lowsql_core::builder::Select;
//!
//! let sql = Select::new()
//!     .columns(["t1.id", "t2.total"])
//!     .from("users", "t1")
//!     .left_join("orders", "t2", "t1.id = t2.user_id")
//!     .build_statement();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT t1.id, t2.total FROM users t1 LEFT JOIN orders t2 ON t1.id = t2.user_id;"
//! );
//! ```

mod select;

pub use select::{HasColumns, HasFrom, NoColumns, NoFrom, Select};
