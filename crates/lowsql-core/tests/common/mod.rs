#![allow(dead_code)]

use lowsql_core::schema::{ColumnSchema, DatabaseSchema, TableSchema};
use lowsql_core::{SchemaProvider, SqlGenerator, StaticSchema};

pub fn generate(generator: &SqlGenerator) -> String {
    generator
        .generate_sql()
        .unwrap_or_else(|e| panic!("Failed to generate: {e}"))
}

pub fn shop_schema() -> StaticSchema {
    StaticSchema::new(vec![DatabaseSchema::new(
        "shop",
        vec![
            TableSchema::new(
                "users",
                vec![
                    ColumnSchema::new("id", "bigint(20)").comment("primary key"),
                    ColumnSchema::new("name", "varchar(64)"),
                    ColumnSchema::new("email", "varchar(255)"),
                ],
            )
            .comment("registered accounts"),
            TableSchema::new(
                "orders",
                vec![
                    ColumnSchema::new("id", "bigint(20)"),
                    ColumnSchema::new("user_id", "bigint(20)"),
                    ColumnSchema::new("total", "decimal(10,2)"),
                ],
            ),
            TableSchema::new(
                "items",
                vec![
                    ColumnSchema::new("order_id", "bigint(20)"),
                    ColumnSchema::new("sku", "varchar(32)"),
                ],
            ),
        ],
    )])
}

pub fn columns_of<P: SchemaProvider>(provider: &P, database: &str, table: &str) -> Vec<String> {
    provider
        .list_columns(database, table)
        .unwrap_or_else(|e| panic!("Failed to list {database}.{table}: {e}"))
}
