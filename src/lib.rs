//! mssql-schema-reader: a fast Rust reader for SQL Server catalog schemas
//!
//! This library inspects a database's catalog and produces a normalized,
//! in-memory model (tables, views, columns, foreign keys, user-defined
//! types, table types, and stored procedures) for code generators, ORMs,
//! and documentation tools to consume instead of querying the catalog
//! themselves.

pub mod catalog;
pub mod error;
pub mod model;
pub mod types;

use anyhow::Result;
use tracing::info;

use catalog::MssqlRowSource;
use model::DataSourceSchemaInfo;

pub use error::SchemaReaderError;

/// Options for reading a database schema
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// ADO.NET-style connection string
    pub connection_string: String,
    /// Restrict discovery to one schema (None reads every schema)
    pub schema_name: Option<String>,
}

/// Read the schema of the database the connection string points at.
///
/// The read is all-or-nothing: any catalog failure aborts it and no partial
/// model is returned.
pub fn read_schema(options: &ReadOptions) -> Result<DataSourceSchemaInfo> {
    let mut source = MssqlRowSource::connect(&options.connection_string)?;

    let schema_info = model::build_schema(&mut source, options.schema_name.as_deref())?;

    info!(
        tables = schema_info.table_definitions.len(),
        scalar_types = schema_info.user_defined_types.len(),
        table_types = schema_info.user_defined_table_types.len(),
        procedures = schema_info.stored_procedures.len(),
        "schema read complete"
    );

    Ok(schema_info)
}
