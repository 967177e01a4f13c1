//! Root schema aggregate

use serde::Serialize;

use super::{StoredProcedure, TableDefinition, UserDefinedTableType, UserDefinedType};

/// The complete normalized schema of one database: a point-in-time snapshot,
/// immutable once returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSchemaInfo {
    pub table_definitions: Vec<TableDefinition>,
    pub user_defined_types: Vec<UserDefinedType>,
    pub user_defined_table_types: Vec<UserDefinedTableType>,
    pub stored_procedures: Vec<StoredProcedure>,
}

impl DataSourceSchemaInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
