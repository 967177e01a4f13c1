//! Row-to-record binding tests

use pretty_assertions::assert_eq;

use mssql_schema_reader::catalog::{
    RawColumn, RawForeignKey, RawObject, RawParameter, RawProcedure, RawUserDefinedType, Row,
    SqlValue,
};

fn field(name: &str, value: SqlValue) -> (String, SqlValue) {
    (name.to_string(), value)
}

#[test]
fn test_column_binding_matches_fields_case_insensitively() {
    let row = Row::new(vec![
        field("fieldname", SqlValue::String("Id".to_string())),
        field("DATABASETYPE", SqlValue::String("int".to_string())),
        field("NumericPrecision", SqlValue::Int(10)),
        field("NumericScale", SqlValue::Int(0)),
        field("IsNullable", SqlValue::Bool(false)),
        field("IsPrimaryKey", SqlValue::Int(1)),
        field("IsIdentity", SqlValue::Int(1)),
        field("Position", SqlValue::Int(1)),
        field("DefaultValue", SqlValue::Null),
        field("MaxLength", SqlValue::Null),
        field("KeyNo", SqlValue::Int(1)),
    ]);

    let column = RawColumn::from_row(&row);

    assert_eq!(column.field_name, "Id");
    assert_eq!(column.database_type, "int");
    assert_eq!(column.numeric_precision, 10);
    assert_eq!(column.is_primary_key, 1);
    assert_eq!(column.is_identity, 1);
    assert_eq!(column.key_no, Some(1));
}

#[test]
fn test_database_null_binds_as_absent() {
    let row = Row::new(vec![
        field("FieldName", SqlValue::String("Notes".to_string())),
        field("DatabaseType", SqlValue::String("nvarchar".to_string())),
        field("DefaultValue", SqlValue::Null),
        field("MaxLength", SqlValue::Null),
        field("KeyNo", SqlValue::Null),
    ]);

    let column = RawColumn::from_row(&row);

    assert_eq!(column.default_value, None);
    assert_eq!(column.max_length, None);
    assert_eq!(column.key_no, None);
}

#[test]
fn test_unmatched_fields_stay_at_default() {
    // A row narrower than the target shape leaves the rest defaulted.
    let row = Row::new(vec![field(
        "FieldName",
        SqlValue::String("Id".to_string()),
    )]);

    let column = RawColumn::from_row(&row);

    assert_eq!(column.field_name, "Id");
    assert_eq!(column.database_type, "");
    assert_eq!(column.is_primary_key, 0);
    assert!(!column.is_nullable);
    assert_eq!(column.position, None);
}

#[test]
fn test_user_defined_type_binding() {
    let row = Row::new(vec![
        field(
            "UserDefinedDatabaseType",
            SqlValue::String("Money19".to_string()),
        ),
        field("DatabaseType", SqlValue::String("decimal".to_string())),
        field("NumericPrecision", SqlValue::Int(19)),
        field("NumericScale", SqlValue::Int(4)),
    ]);

    let alias = RawUserDefinedType::from_row(&row);

    assert_eq!(alias.user_defined_database_type, "Money19");
    assert_eq!(alias.database_type, "decimal");
    assert_eq!(alias.numeric_precision, 19);
    assert_eq!(alias.numeric_scale, 4);
}

#[test]
fn test_procedure_and_parameter_binding() {
    let procedure_row = Row::new(vec![
        field("Schema", SqlValue::String("dbo".to_string())),
        field("Name", SqlValue::String("GetOrders".to_string())),
        field("ObjectId", SqlValue::Int(1234)),
    ]);
    let procedure = RawProcedure::from_row(&procedure_row);
    assert_eq!(procedure.schema, "dbo");
    assert_eq!(procedure.name, "GetOrders");
    assert_eq!(procedure.object_id, 1234);

    let parameter_row = Row::new(vec![
        field("Name", SqlValue::String("@CustomerId".to_string())),
        field("Type", SqlValue::String("int".to_string())),
        field("Length", SqlValue::Int(4)),
        field("IsNullable", SqlValue::Bool(true)),
        field("IsOutput", SqlValue::Bool(false)),
        field("IsReadonly", SqlValue::Bool(false)),
        field("IsXmlDocument", SqlValue::Bool(false)),
    ]);
    let parameter = RawParameter::from_row(&parameter_row);
    assert_eq!(parameter.name, "@CustomerId");
    assert_eq!(parameter.type_name, "int");
    assert_eq!(parameter.length, 4);
    assert!(parameter.is_nullable);
    assert!(!parameter.is_output);
}

#[test]
fn test_object_and_foreign_key_binding() {
    let object_row = Row::new(vec![
        field("Schema", SqlValue::String("dbo".to_string())),
        field("Type", SqlValue::String("USER_TABLE".to_string())),
        field("Name", SqlValue::String("Orders".to_string())),
    ]);
    let object = RawObject::from_row(&object_row);
    assert_eq!(object.type_desc, "USER_TABLE");
    assert_eq!(object.name, "Orders");

    let fk_row = Row::new(vec![
        field("ParentTableName", SqlValue::String("Orders".to_string())),
        field("ParentTableSchema", SqlValue::String("dbo".to_string())),
        field(
            "ParentColumnName",
            SqlValue::String("CustomerId".to_string()),
        ),
        field(
            "ReferenceTableName",
            SqlValue::String("Customers".to_string()),
        ),
        field("ReferenceTableSchema", SqlValue::String("dbo".to_string())),
        field("ReferenceColumnName", SqlValue::String("Id".to_string())),
    ]);
    let foreign_key = RawForeignKey::from_row(&fk_row);
    assert_eq!(foreign_key.parent_table_name, "Orders");
    assert_eq!(foreign_key.reference_table_name, "Customers");
    assert_eq!(foreign_key.reference_column_name, "Id");
}
