//! Normalized schema model types

use serde::Serialize;

use crate::types::SystemMethod;

/// Kind of catalog object a [`TableDefinition`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectType {
    Table,
    View,
}

/// One normalized column or table-type field.
///
/// `default_value` and `with_default` are mutually exclusive: when a default
/// classifies as a system-generated method the literal is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnDefinition {
    pub name: String,
    /// Resolved logical type, stored in its string form (e.g. "Int32").
    #[serde(rename = "Type")]
    pub column_type: String,
    /// Character maximum length, when the type has one.
    pub size: Option<i32>,
    pub precision: Option<i32>,
    pub nullable: bool,
    pub identity: bool,
    pub primary_key: bool,
    /// Position within a composite primary key, when the catalog reports one.
    pub key_number: Option<i32>,
    pub default_value: Option<String>,
    pub with_default: Option<SystemMethod>,
}

/// A foreign-key relationship, held by the table it *references*.
///
/// The referencing (declaring) side is described by the `foreign_key_*`
/// fields; `primary_key_column` is the referenced column on the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForeignKeyDefinition {
    pub primary_key_column: String,
    pub foreign_key_column: String,
    pub foreign_key_table: String,
    pub foreign_key_table_schema: String,
}

/// A table or view with its columns and the foreign keys that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDefinition {
    pub object_type: ObjectType,
    pub schema: String,
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

impl TableDefinition {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// A user-defined scalar alias for a built-in type.
///
/// Field names mirror the catalog result set; precision and scale are the
/// values captured when the alias was defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDefinedType {
    pub user_defined_database_type: String,
    pub database_type: String,
    pub numeric_precision: i32,
    pub numeric_scale: i32,
}

/// A named, reusable row shape usable as a parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDefinedTableType {
    pub schema: String,
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl UserDefinedTableType {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoredProcedure {
    pub schema: String,
    pub name: String,
    pub parameters: Vec<StoredProcedureParameter>,
}

impl StoredProcedure {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// A stored procedure parameter with its sigil-stripped name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoredProcedureParameter {
    pub name: String,
    /// Resolved type name: the aliased built-in for scalar aliases, the
    /// logical type name for built-ins, or the raw name for table types.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Owning schema, set only when the type is a user-defined table type.
    pub type_schema: Option<String>,
    pub length: i32,
    pub is_nullable: bool,
    pub is_output: bool,
    pub is_readonly: bool,
    pub is_xml_document: bool,
}
