//! Common test utilities for mssql-schema-reader tests

use mssql_schema_reader::catalog::{ParamValue, Row, RowSource, SqlValue};
use mssql_schema_reader::SchemaReaderError;

/// An in-memory row source: canned rows keyed by (query text, parameters).
///
/// Lookups are repeatable, so the same source can serve several full assembly
/// runs. Queries with no canned response return no rows, which matches a
/// catalog that simply has nothing for that object.
#[derive(Default)]
pub struct FakeRowSource {
    responses: Vec<CannedResponse>,
}

struct CannedResponse {
    sql: String,
    params: Vec<(String, ParamValue)>,
    rows: Vec<Row>,
}

impl FakeRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows to return for an exact (query, params) pair.
    pub fn on(mut self, sql: &str, params: &[(&str, ParamValue)], rows: Vec<Row>) -> Self {
        self.responses.push(CannedResponse {
            sql: sql.to_string(),
            params: params
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
            rows,
        });
        self
    }
}

impl RowSource for FakeRowSource {
    fn query(
        &mut self,
        sql: &str,
        params: &[(&str, ParamValue)],
    ) -> Result<Vec<Row>, SchemaReaderError> {
        let found = self.responses.iter().find(|response| {
            response.sql == sql
                && response.params.len() == params.len()
                && response
                    .params
                    .iter()
                    .zip(params)
                    .all(|((name, value), (expected_name, expected_value))| {
                        name == expected_name && value == expected_value
                    })
        });

        Ok(found.map(|response| response.rows.clone()).unwrap_or_default())
    }
}

pub fn row(fields: Vec<(&str, SqlValue)>) -> Row {
    Row::new(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

pub fn string(value: &str) -> SqlValue {
    SqlValue::String(value.to_string())
}

pub fn int(value: i64) -> SqlValue {
    SqlValue::Int(value)
}

pub fn bit(value: bool) -> SqlValue {
    SqlValue::Bool(value)
}

/// Shorthand for building rows in the column-query shape.
pub struct ColumnRow {
    pub field_name: &'static str,
    pub database_type: &'static str,
    pub precision: i64,
    pub scale: i64,
    pub nullable: bool,
    pub primary_key: bool,
    pub identity: bool,
    pub position: i64,
    pub default_value: Option<&'static str>,
    pub max_length: Option<i64>,
    pub key_no: Option<i64>,
}

impl Default for ColumnRow {
    fn default() -> Self {
        Self {
            field_name: "Column",
            database_type: "int",
            precision: 10,
            scale: 0,
            nullable: false,
            primary_key: false,
            identity: false,
            position: 1,
            default_value: None,
            max_length: None,
            key_no: None,
        }
    }
}

impl ColumnRow {
    pub fn into_row(self) -> Row {
        row(vec![
            ("FieldName", string(self.field_name)),
            ("DatabaseType", string(self.database_type)),
            ("NumericPrecision", int(self.precision)),
            ("NumericScale", int(self.scale)),
            ("IsNullable", bit(self.nullable)),
            ("IsPrimaryKey", int(i64::from(self.primary_key))),
            ("IsIdentity", int(i64::from(self.identity))),
            ("Position", int(self.position)),
            (
                "DefaultValue",
                self.default_value.map(string).unwrap_or(SqlValue::Null),
            ),
            (
                "MaxLength",
                self.max_length.map(int).unwrap_or(SqlValue::Null),
            ),
            ("KeyNo", self.key_no.map(int).unwrap_or(SqlValue::Null)),
        ])
    }
}
