//! Column normalization: raw catalog column rows to [`ColumnDefinition`]s

use std::collections::HashMap;

use crate::catalog::RawColumn;
use crate::types::{ColumnType, DefaultValue};

use super::{ColumnDefinition, UserDefinedType};

/// Normalize raw column rows, in the order the catalog returned them.
///
/// Each row goes through one level of scalar-alias substitution (the catalog
/// does not nest user-defined types), then type resolution. Rows whose type
/// resolves to [`ColumnType::Custom`] are dropped entirely; no partial
/// definition is emitted for a column the model cannot express.
pub fn column_definitions(
    columns: &[RawColumn],
    user_defined_types: &HashMap<String, UserDefinedType>,
) -> Vec<ColumnDefinition> {
    let mut definitions = Vec::with_capacity(columns.len());

    for column in columns {
        let mut database_type = column.database_type.as_str();
        let mut precision = column.numeric_precision;

        if let Some(alias) = user_defined_types.get(&column.database_type) {
            // The alias's captured precision wins over the row's own.
            database_type = alias.database_type.as_str();
            precision = alias.numeric_precision;
        }

        let column_type = ColumnType::resolve(database_type);
        if column_type == ColumnType::Custom {
            continue;
        }

        let (default_value, with_default) =
            match DefaultValue::classify(column.default_value.as_deref()) {
                DefaultValue::Literal(value) => (Some(value), None),
                DefaultValue::Method(method) => (None, Some(method)),
                DefaultValue::Absent => (None, None),
            };

        let primary_key = column.is_primary_key == 1;

        definitions.push(ColumnDefinition {
            name: column.field_name.clone(),
            column_type: column_type.as_str().to_string(),
            size: column.max_length,
            precision: Some(precision),
            nullable: column.is_nullable,
            identity: column.is_identity == 1,
            primary_key,
            key_number: if primary_key { column.key_no } else { None },
            default_value,
            with_default,
        });
    }

    definitions
}
