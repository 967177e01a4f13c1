//! Assemble the schema aggregate from catalog queries
//!
//! Discovery runs in a fixed order, each step building on the last: scalar
//! aliases first (they feed every later type resolution), then table types,
//! procedures, tables/views, and finally foreign keys. Foreign-key attachment
//! is two-phase: every table definition must exist before any key is resolved
//! against the set, so step 5 never starts until step 4 has finished.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{
    queries, ParamValue, RawColumn, RawForeignKey, RawObject, RawParameter, RawProcedure,
    RawTableType, RawUserDefinedType, RowSource,
};
use crate::error::SchemaReaderError;
use crate::types::ColumnType;

use super::columns::column_definitions;
use super::{
    DataSourceSchemaInfo, ForeignKeyDefinition, ObjectType, StoredProcedure,
    StoredProcedureParameter, TableDefinition, UserDefinedTableType, UserDefinedType,
};

/// Diagramming-support procedures the designer tooling installs under `dbo`.
/// They are database-tooling artifacts, never user content.
const DIAGRAM_PROCEDURES: [&str; 7] = [
    "sp_upgraddiagrams",
    "sp_helpdiagrams",
    "sp_helpdiagramdefinition",
    "sp_creatediagram",
    "sp_renamediagram",
    "sp_alterdiagram",
    "sp_dropdiagram",
];

/// Read the full schema through `source`, optionally filtered to one schema.
///
/// Any failure aborts the whole read; no partial aggregate is ever returned.
pub fn build_schema(
    source: &mut dyn RowSource,
    schema_name: Option<&str>,
) -> Result<DataSourceSchemaInfo, SchemaReaderError> {
    let mut schema_info = DataSourceSchemaInfo::new();

    // A blank filter means "no filter"; the queries test @SchemaName IS NULL.
    let schema_param = match schema_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => ParamValue::String(name.to_string()),
        None => ParamValue::Null,
    };

    // Step 1: user-defined scalar aliases, keyed by name for every later
    // type resolution. The key match is exact, as the catalog defines it.
    let mut user_defined_types: HashMap<String, UserDefinedType> = HashMap::new();
    for row in source.query(queries::USER_DEFINED_TYPES, &[])? {
        let raw = RawUserDefinedType::from_row(&row);
        let alias = UserDefinedType {
            user_defined_database_type: raw.user_defined_database_type,
            database_type: raw.database_type,
            numeric_precision: raw.numeric_precision,
            numeric_scale: raw.numeric_scale,
        };
        user_defined_types.insert(alias.user_defined_database_type.clone(), alias.clone());
        schema_info.user_defined_types.push(alias);
    }
    debug!(
        count = schema_info.user_defined_types.len(),
        "discovered user-defined scalar types"
    );

    // Step 2: user-defined table types with their columns.
    let table_type_rows = source.query(
        queries::USER_DEFINED_TABLE_TYPES,
        &[("SchemaName", schema_param.clone())],
    )?;
    for row in &table_type_rows {
        let raw = RawTableType::from_row(row);
        let column_rows = source.query(
            queries::USER_DEFINED_TABLE_TYPE_COLUMNS,
            &[("UserTypeId", ParamValue::Int(raw.user_type_id))],
        )?;
        let raw_columns: Vec<RawColumn> = column_rows.iter().map(RawColumn::from_row).collect();
        schema_info.user_defined_table_types.push(UserDefinedTableType {
            schema: raw.schema,
            name: raw.name,
            columns: column_definitions(&raw_columns, &user_defined_types),
        });
    }
    debug!(
        count = schema_info.user_defined_table_types.len(),
        "discovered user-defined table types"
    );

    // Step 3: stored procedures and their parameters.
    let procedure_rows = source.query(
        queries::STORED_PROCEDURES,
        &[("SchemaName", schema_param.clone())],
    )?;
    for row in &procedure_rows {
        let raw = RawProcedure::from_row(row);
        if raw.schema == "dbo" && DIAGRAM_PROCEDURES.contains(&raw.name.as_str()) {
            continue;
        }

        let parameter_rows = source.query(
            queries::STORED_PROCEDURE_PARAMETERS,
            &[("ObjectId", ParamValue::Int(raw.object_id))],
        )?;

        let mut procedure = StoredProcedure {
            schema: raw.schema,
            name: raw.name,
            parameters: Vec::with_capacity(parameter_rows.len()),
        };

        for parameter_row in &parameter_rows {
            let raw_parameter = RawParameter::from_row(parameter_row);
            procedure
                .parameters
                .push(build_parameter(raw_parameter, &user_defined_types, &schema_info));
        }

        schema_info.stored_procedures.push(procedure);
    }
    debug!(
        count = schema_info.stored_procedures.len(),
        "discovered stored procedures"
    );

    // Step 4: tables and views with their columns. All of them must exist
    // before step 5 attaches a single foreign key.
    let object_rows = source.query(queries::OBJECTS, &[("SchemaName", schema_param)])?;
    let objects: Vec<RawObject> = object_rows.iter().map(RawObject::from_row).collect();

    for object in &objects {
        let object_type = match object.type_desc.as_str() {
            "USER_TABLE" => ObjectType::Table,
            "VIEW" => ObjectType::View,
            other => {
                return Err(SchemaReaderError::UnsupportedObjectType {
                    type_desc: other.to_string(),
                })
            }
        };

        // Views report no primary-key or identity metadata; their query
        // hard-codes those fields to absent.
        let columns_query = match object_type {
            ObjectType::Table => queries::TABLE_COLUMNS,
            ObjectType::View => queries::VIEW_COLUMNS,
        };

        let column_rows = source.query(
            columns_query,
            &[
                ("ObjectName", ParamValue::String(object.name.clone())),
                ("Schema", ParamValue::String(object.schema.clone())),
            ],
        )?;
        let raw_columns: Vec<RawColumn> = column_rows.iter().map(RawColumn::from_row).collect();

        schema_info.table_definitions.push(TableDefinition {
            object_type,
            schema: object.schema.clone(),
            name: object.name.clone(),
            columns: column_definitions(&raw_columns, &user_defined_types),
            foreign_keys: Vec::new(),
        });
    }
    debug!(
        count = schema_info.table_definitions.len(),
        "discovered tables and views"
    );

    // Step 5, phase 1: index the finished table set by (schema, name).
    // A duplicate here is a catalog read inconsistency, not something to merge.
    let mut table_index: HashMap<(String, String), usize> = HashMap::new();
    for (position, table) in schema_info.table_definitions.iter().enumerate() {
        let key = (table.schema.clone(), table.name.clone());
        if table_index.insert(key, position).is_some() {
            return Err(SchemaReaderError::DuplicateTableDefinition {
                schema: table.schema.clone(),
                name: table.name.clone(),
            });
        }
    }

    // Step 5, phase 2: attach each foreign key to the table it references.
    let mut foreign_key_count = 0usize;
    for object in &objects {
        let foreign_key_rows = source.query(
            queries::FOREIGN_KEYS,
            &[
                ("ObjectName", ParamValue::String(object.name.clone())),
                ("Schema", ParamValue::String(object.schema.clone())),
            ],
        )?;

        for row in &foreign_key_rows {
            let raw = RawForeignKey::from_row(row);
            let key = (
                raw.reference_table_schema.clone(),
                raw.reference_table_name.clone(),
            );
            let Some(&position) = table_index.get(&key) else {
                return Err(SchemaReaderError::UnresolvedForeignKeyTarget {
                    schema: raw.reference_table_schema,
                    name: raw.reference_table_name,
                });
            };

            schema_info.table_definitions[position]
                .foreign_keys
                .push(ForeignKeyDefinition {
                    primary_key_column: raw.reference_column_name,
                    foreign_key_column: raw.parent_column_name,
                    foreign_key_table: raw.parent_table_name,
                    foreign_key_table_schema: raw.parent_table_schema,
                });
            foreign_key_count += 1;
        }
    }
    debug!(count = foreign_key_count, "attached foreign keys");

    Ok(schema_info)
}

/// Resolve one procedure parameter.
///
/// The type resolution chain: scalar alias (exact name match) first, then the
/// built-in resolver keeping the logical name, else the raw name, which, when
/// it matches an already-discovered table type, also records that type's
/// owning schema.
fn build_parameter(
    raw: RawParameter,
    user_defined_types: &HashMap<String, UserDefinedType>,
    schema_info: &DataSourceSchemaInfo,
) -> StoredProcedureParameter {
    let mut type_schema = None;

    let type_name = if let Some(alias) = user_defined_types.get(&raw.type_name) {
        alias.database_type.clone()
    } else {
        let resolved = ColumnType::resolve(&raw.type_name);
        if resolved != ColumnType::Custom {
            resolved.as_str().to_string()
        } else {
            if let Some(table_type) = schema_info
                .user_defined_table_types
                .iter()
                .find(|table_type| table_type.name.eq_ignore_ascii_case(&raw.type_name))
            {
                type_schema = Some(table_type.schema.clone());
            }
            raw.type_name
        }
    };

    StoredProcedureParameter {
        name: raw.name.trim_start_matches('@').to_string(),
        type_name,
        type_schema,
        length: raw.length,
        is_nullable: raw.is_nullable,
        is_output: raw.is_output,
        is_readonly: raw.is_readonly,
        is_xml_document: raw.is_xml_document,
    }
}
