//! Row-source boundary: the abstract interface the engine reads catalogs through

use crate::error::SchemaReaderError;

/// A single value in a catalog result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Database NULL. Getters surface this as `None`, never as a sentinel.
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

/// A named query parameter value.
///
/// Optional filters are passed as an explicit `Null` rather than omitted,
/// because the catalog queries test `@Param IS NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Null,
    String(String),
    Int(i32),
}

/// One result row: ordered named fields, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn new(fields: Vec<(String, SqlValue)>) -> Self {
        Self { fields }
    }

    /// Look up a field by name, case-insensitively. `Some(&SqlValue::Null)`
    /// means the field exists but holds database NULL.
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(SqlValue::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Integer accessor. The catalog reports several flag-like fields with
    /// narrower integer types (tinyint, smallint); all widths land here.
    pub fn get_i32(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(SqlValue::Int(value)) => i32::try_from(*value).ok(),
            Some(SqlValue::Bool(value)) => Some(i32::from(*value)),
            _ => None,
        }
    }

    /// Boolean accessor. Bit fields arrive as `Bool`; integer flags such as
    /// COLUMNPROPERTY results are treated as set when non-zero.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(SqlValue::Bool(value)) => Some(*value),
            Some(SqlValue::Int(value)) => Some(*value != 0),
            _ => None,
        }
    }
}

/// Executes parameterized catalog queries and returns named-field rows.
///
/// The engine issues one query at a time and fully consumes each result before
/// the next; implementations may block on I/O but the engine imposes no
/// timeout or retry policy of its own.
pub trait RowSource {
    fn query(
        &mut self,
        sql: &str,
        params: &[(&str, ParamValue)],
    ) -> Result<Vec<Row>, SchemaReaderError>;
}
