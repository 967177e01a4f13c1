//! Canonical logical column types and catalog type-name resolution

use std::collections::HashMap;
use std::sync::LazyLock;

/// A canonical storage type as exposed in the normalized model.
///
/// `Custom` is the explicit "unsupported" outcome: the resolver returns it for
/// catalog type names it does not know, and callers drop the owning column or
/// parameter rather than emitting a partial definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    AnsiString,
    Binary,
    Boolean,
    Byte,
    Currency,
    Custom,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Double,
    FixedLengthAnsiString,
    FixedLengthString,
    Float,
    Guid,
    Int16,
    Int32,
    Int64,
    String,
    Time,
    Xml,
}

/// Fixed mapping from SQL Server catalog type names to logical types.
/// Keys are lowercase; lookups normalize case before probing.
static TYPE_NAME_MAP: LazyLock<HashMap<&'static str, ColumnType>> = LazyLock::new(|| {
    HashMap::from([
        ("varchar", ColumnType::AnsiString),
        ("text", ColumnType::AnsiString),
        ("char", ColumnType::FixedLengthAnsiString),
        ("nvarchar", ColumnType::String),
        ("ntext", ColumnType::String),
        ("nchar", ColumnType::FixedLengthString),
        ("binary", ColumnType::Binary),
        ("varbinary", ColumnType::Binary),
        ("image", ColumnType::Binary),
        ("bit", ColumnType::Boolean),
        ("tinyint", ColumnType::Byte),
        ("money", ColumnType::Currency),
        ("smallmoney", ColumnType::Currency),
        ("date", ColumnType::Date),
        ("datetime", ColumnType::DateTime),
        ("smalldatetime", ColumnType::DateTime),
        ("datetime2", ColumnType::DateTime2),
        ("datetimeoffset", ColumnType::DateTimeOffset),
        ("decimal", ColumnType::Decimal),
        ("numeric", ColumnType::Decimal),
        ("float", ColumnType::Double),
        ("real", ColumnType::Float),
        ("uniqueidentifier", ColumnType::Guid),
        ("smallint", ColumnType::Int16),
        ("int", ColumnType::Int32),
        ("bigint", ColumnType::Int64),
        ("time", ColumnType::Time),
        ("xml", ColumnType::Xml),
    ])
});

impl ColumnType {
    /// Resolve a raw catalog type name, case-insensitively.
    ///
    /// Unknown names resolve to [`ColumnType::Custom`]; callers treat that as
    /// "skip the owning column/parameter", never as a fatal error.
    pub fn resolve(type_name: &str) -> ColumnType {
        TYPE_NAME_MAP
            .get(type_name.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(ColumnType::Custom)
    }

    /// The string form stored on normalized columns (e.g. "Int32").
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::AnsiString => "AnsiString",
            ColumnType::Binary => "Binary",
            ColumnType::Boolean => "Boolean",
            ColumnType::Byte => "Byte",
            ColumnType::Currency => "Currency",
            ColumnType::Custom => "Custom",
            ColumnType::Date => "Date",
            ColumnType::DateTime => "DateTime",
            ColumnType::DateTime2 => "DateTime2",
            ColumnType::DateTimeOffset => "DateTimeOffset",
            ColumnType::Decimal => "Decimal",
            ColumnType::Double => "Double",
            ColumnType::FixedLengthAnsiString => "FixedLengthAnsiString",
            ColumnType::FixedLengthString => "FixedLengthString",
            ColumnType::Float => "Float",
            ColumnType::Guid => "Guid",
            ColumnType::Int16 => "Int16",
            ColumnType::Int32 => "Int32",
            ColumnType::Int64 => "Int64",
            ColumnType::String => "String",
            ColumnType::Time => "Time",
            ColumnType::Xml => "Xml",
        }
    }
}
