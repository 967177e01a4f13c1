//! Error types for mssql-schema-reader

use thiserror::Error;

/// Errors that can occur while reading a database schema.
///
/// Every variant aborts the whole read: the engine never returns a partial
/// aggregate. Columns with unresolvable types are not represented here; the
/// normalizer drops them silently.
#[derive(Error, Debug)]
pub enum SchemaReaderError {
    #[error("Failed to start async runtime")]
    Runtime {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to reach SQL Server at {addr}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to establish SQL Server session")]
    Connection {
        #[source]
        source: tiberius::error::Error,
    },

    #[error("Catalog query failed")]
    Query {
        #[source]
        source: tiberius::error::Error,
    },

    #[error("ObjectType of {type_desc} is not supported")]
    UnsupportedObjectType { type_desc: String },

    #[error("Duplicate table definition for {schema}.{name}")]
    DuplicateTableDefinition { schema: String, name: String },

    #[error("Foreign key references unknown table {schema}.{name}")]
    UnresolvedForeignKeyTarget { schema: String, name: String },
}

impl From<tiberius::error::Error> for SchemaReaderError {
    fn from(err: tiberius::error::Error) -> Self {
        SchemaReaderError::Query { source: err }
    }
}
