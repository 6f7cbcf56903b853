//! CLI library functions against a schema fixture on disk.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use lowsql_cli::{
    CliError, GenerateRequest, load_schema, render_columns, render_databases, render_tables,
};
use lowsql_core::SchemaError;

fn fixture() -> NamedTempFile {
    let document = json!({
        "databases": [
            {
                "name": "shop",
                "tables": [
                    {
                        "name": "users",
                        "comment": "registered accounts",
                        "columns": [
                            { "name": "id", "type": "bigint(20)", "comment": "primary key" },
                            { "name": "name", "type": "varchar(64)" }
                        ]
                    },
                    {
                        "name": "orders",
                        "columns": [
                            { "name": "user_id", "type": "bigint(20)" },
                            { "name": "total", "type": "decimal(10,2)" }
                        ]
                    }
                ]
            },
            { "name": "audit" }
        ]
    });
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{document}").expect("write fixture");
    file
}

fn request(main: &str, selects: &[&str], joins: &[&str]) -> GenerateRequest {
    let selects: Vec<String> = selects.iter().map(ToString::to_string).collect();
    let joins: Vec<String> = joins.iter().map(ToString::to_string).collect();
    GenerateRequest::parse(main, &selects, &joins).expect("valid request")
}

#[test]
fn lists_databases_tables_and_columns() {
    let file = fixture();
    let schema = load_schema(file.path()).unwrap();

    assert_eq!(render_databases(&schema).unwrap(), "shop\naudit\n");
    assert_eq!(
        render_tables(&schema, "shop").unwrap(),
        "users\tregistered accounts\norders\n"
    );
    assert_eq!(
        render_columns(&schema, "shop", "users").unwrap(),
        "id\tbigint(20)\tprimary key\nname\tvarchar(64)\n"
    );
}

#[test]
fn unknown_database_is_reported() {
    let file = fixture();
    let schema = load_schema(file.path()).unwrap();
    assert!(matches!(
        render_tables(&schema, "missing"),
        Err(CliError::Schema(SchemaError::UnknownDatabase(_)))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_schema(&dir.path().join("nope.json")),
        Err(CliError::Io(_))
    ));
}

#[test]
fn checked_request_generates() {
    let file = fixture();
    let schema = load_schema(file.path()).unwrap();
    let request = request(
        "users",
        &["users:id,name", "orders:total"],
        &["users.id=orders.user_id"],
    );

    request.check(&schema, "shop").unwrap();
    assert_eq!(
        request.to_generator().generate_sql().unwrap(),
        "SELECT t1.id, t1.name, t2.total FROM users t1 LEFT JOIN orders t2 ON t1.id = t2.user_id;"
    );
}

#[test]
fn check_rejects_unknown_column() {
    let file = fixture();
    let schema = load_schema(file.path()).unwrap();
    let request = request("users", &["users:email"], &[]);

    assert!(matches!(
        request.check(&schema, "shop"),
        Err(CliError::UnknownColumn { table, column, .. })
            if table == "users" && column == "email"
    ));
}

#[test]
fn check_rejects_unknown_main_table() {
    let file = fixture();
    let schema = load_schema(file.path()).unwrap();
    let request = request("payments", &["users:id"], &[]);

    assert!(matches!(
        request.check(&schema, "shop"),
        Err(CliError::Schema(SchemaError::UnknownTable { .. }))
    ));
}
