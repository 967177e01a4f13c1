//! Raw catalog result shapes
//!
//! One record per query result shape, each with a hand-written `from_row`
//! constructor. Field matching is case-insensitive; fields absent from the
//! row (or holding database NULL) stay at their default.

use super::source::Row;

/// Row shape of [`super::queries::USER_DEFINED_TYPES`].
#[derive(Debug, Clone, Default)]
pub struct RawUserDefinedType {
    pub user_defined_database_type: String,
    pub database_type: String,
    pub numeric_precision: i32,
    pub numeric_scale: i32,
}

impl RawUserDefinedType {
    pub fn from_row(row: &Row) -> Self {
        Self {
            user_defined_database_type: row.get_string("UserDefinedDatabaseType").unwrap_or_default(),
            database_type: row.get_string("DatabaseType").unwrap_or_default(),
            numeric_precision: row.get_i32("NumericPrecision").unwrap_or_default(),
            numeric_scale: row.get_i32("NumericScale").unwrap_or_default(),
        }
    }
}

/// Row shape of [`super::queries::USER_DEFINED_TABLE_TYPES`].
#[derive(Debug, Clone, Default)]
pub struct RawTableType {
    pub schema: String,
    pub name: String,
    pub user_type_id: i32,
}

impl RawTableType {
    pub fn from_row(row: &Row) -> Self {
        Self {
            schema: row.get_string("Schema").unwrap_or_default(),
            name: row.get_string("Name").unwrap_or_default(),
            user_type_id: row.get_i32("UserTypeId").unwrap_or_default(),
        }
    }
}

/// Row shape shared by the table, view, and table-type column queries.
///
/// `is_primary_key` is a constraint-usage count and `is_identity` a
/// COLUMNPROPERTY result, both integers where `1` means set. The view query
/// hard-codes key metadata to absent.
#[derive(Debug, Clone, Default)]
pub struct RawColumn {
    pub field_name: String,
    pub database_type: String,
    pub numeric_precision: i32,
    pub numeric_scale: i32,
    pub is_nullable: bool,
    pub is_primary_key: i32,
    pub is_identity: i32,
    pub position: Option<i32>,
    pub default_value: Option<String>,
    pub max_length: Option<i32>,
    pub key_no: Option<i32>,
}

impl RawColumn {
    pub fn from_row(row: &Row) -> Self {
        Self {
            field_name: row.get_string("FieldName").unwrap_or_default(),
            database_type: row.get_string("DatabaseType").unwrap_or_default(),
            numeric_precision: row.get_i32("NumericPrecision").unwrap_or_default(),
            numeric_scale: row.get_i32("NumericScale").unwrap_or_default(),
            is_nullable: row.get_bool("IsNullable").unwrap_or_default(),
            is_primary_key: row.get_i32("IsPrimaryKey").unwrap_or_default(),
            is_identity: row.get_i32("IsIdentity").unwrap_or_default(),
            position: row.get_i32("Position"),
            default_value: row.get_string("DefaultValue"),
            max_length: row.get_i32("MaxLength"),
            key_no: row.get_i32("KeyNo"),
        }
    }
}

/// Row shape of [`super::queries::STORED_PROCEDURES`].
#[derive(Debug, Clone, Default)]
pub struct RawProcedure {
    pub schema: String,
    pub name: String,
    pub object_id: i32,
}

impl RawProcedure {
    pub fn from_row(row: &Row) -> Self {
        Self {
            schema: row.get_string("Schema").unwrap_or_default(),
            name: row.get_string("Name").unwrap_or_default(),
            object_id: row.get_i32("ObjectId").unwrap_or_default(),
        }
    }
}

/// Row shape of [`super::queries::STORED_PROCEDURE_PARAMETERS`].
#[derive(Debug, Clone, Default)]
pub struct RawParameter {
    pub name: String,
    pub type_name: String,
    pub length: i32,
    pub is_nullable: bool,
    pub is_output: bool,
    pub is_readonly: bool,
    pub is_xml_document: bool,
}

impl RawParameter {
    pub fn from_row(row: &Row) -> Self {
        Self {
            name: row.get_string("Name").unwrap_or_default(),
            type_name: row.get_string("Type").unwrap_or_default(),
            length: row.get_i32("Length").unwrap_or_default(),
            is_nullable: row.get_bool("IsNullable").unwrap_or_default(),
            is_output: row.get_bool("IsOutput").unwrap_or_default(),
            is_readonly: row.get_bool("IsReadonly").unwrap_or_default(),
            is_xml_document: row.get_bool("IsXmlDocument").unwrap_or_default(),
        }
    }
}

/// Row shape of [`super::queries::OBJECTS`].
#[derive(Debug, Clone, Default)]
pub struct RawObject {
    pub schema: String,
    /// Catalog `type_desc`: `USER_TABLE` or `VIEW`; anything else is a
    /// filtering drift the assembler refuses.
    pub type_desc: String,
    pub name: String,
}

impl RawObject {
    pub fn from_row(row: &Row) -> Self {
        Self {
            schema: row.get_string("Schema").unwrap_or_default(),
            type_desc: row.get_string("Type").unwrap_or_default(),
            name: row.get_string("Name").unwrap_or_default(),
        }
    }
}

/// Row shape of [`super::queries::FOREIGN_KEYS`].
#[derive(Debug, Clone, Default)]
pub struct RawForeignKey {
    pub parent_table_name: String,
    pub parent_table_schema: String,
    pub parent_column_name: String,
    pub reference_table_name: String,
    pub reference_table_schema: String,
    pub reference_column_name: String,
}

impl RawForeignKey {
    pub fn from_row(row: &Row) -> Self {
        Self {
            parent_table_name: row.get_string("ParentTableName").unwrap_or_default(),
            parent_table_schema: row.get_string("ParentTableSchema").unwrap_or_default(),
            parent_column_name: row.get_string("ParentColumnName").unwrap_or_default(),
            reference_table_name: row.get_string("ReferenceTableName").unwrap_or_default(),
            reference_table_schema: row.get_string("ReferenceTableSchema").unwrap_or_default(),
            reference_column_name: row.get_string("ReferenceColumnName").unwrap_or_default(),
        }
    }
}
