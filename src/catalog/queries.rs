//! Catalog query text
//!
//! These statements target the SQL Server catalog shape directly (sys.*,
//! INFORMATION_SCHEMA) with no dialect abstraction. Optional filters are bound
//! as explicit NULL, which the `@SchemaName IS NULL` predicates rely on.

/// User-defined scalar aliases with the built-in type each one aliases.
/// `sysname` is itself an alias and is excluded.
pub const USER_DEFINED_TYPES: &str = "\
SELECT DISTINCT
    user_defined_type.name AS [UserDefinedDatabaseType],
    t.name AS [DatabaseType],
    t.precision AS [NumericPrecision],
    t.scale AS [NumericScale]
FROM sys.types user_defined_type
INNER JOIN sys.types t ON t.system_type_id = user_defined_type.system_type_id
WHERE user_defined_type.is_user_defined = 1
    AND t.is_user_defined = 0
    AND t.name <> 'sysname'";

pub const USER_DEFINED_TABLE_TYPES: &str = "\
SELECT s.name AS [Schema],
    t.name AS [Name],
    t.user_type_id AS [UserTypeId]
FROM sys.table_types t
INNER JOIN sys.schemas s ON s.schema_id = t.schema_id
WHERE t.is_user_defined = 1
    AND (@SchemaName IS NULL OR s.name = @SchemaName)
ORDER BY t.name ASC";

pub const USER_DEFINED_TABLE_TYPE_COLUMNS: &str = "\
SELECT table_type.name AS [ObjectName],
    col.name AS [FieldName],
    st.name AS [DatabaseType],
    col.[precision] AS [NumericPrecision],
    col.scale AS [NumericScale],
    col.is_nullable AS [IsNullable],
    col.column_id AS [Position],
    CAST(col.max_length AS INT) AS [MaxLength]
FROM sys.table_types table_type
JOIN sys.columns col ON table_type.type_table_object_id = col.object_id
JOIN sys.systypes AS st ON st.xtype = col.system_type_id
WHERE table_type.is_user_defined = 1
    AND table_type.user_type_id = @UserTypeId
ORDER BY table_type.name, col.column_id";

pub const STORED_PROCEDURES: &str = "\
SELECT s.name AS [Schema],
    o.name AS [Name],
    o.object_id AS [ObjectId]
FROM sys.all_objects o
INNER JOIN sys.schemas s ON s.schema_id = o.schema_id
WHERE o.type = 'P' -- procedures
    AND s.name <> 'sys'
    AND (@SchemaName IS NULL OR s.name = @SchemaName)
ORDER BY s.name ASC";

pub const STORED_PROCEDURE_PARAMETERS: &str = "\
SELECT parameters.name AS [Name],
    parameters.is_nullable AS [IsNullable],
    parameters.is_output AS [IsOutput],
    parameters.is_readonly AS [IsReadonly],
    parameters.is_xml_document AS [IsXmlDocument],
    types.name AS [Type],
    types.max_length AS [Length]
FROM sys.parameters
INNER JOIN sys.procedures ON parameters.object_id = procedures.object_id
INNER JOIN sys.types ON parameters.system_type_id = types.system_type_id
    AND parameters.user_type_id = types.user_type_id
WHERE procedures.object_id = @ObjectId
ORDER BY parameters.parameter_id";

/// Tables and views, excluding the engine's own schemas and two housekeeping
/// schemas that tooling leaves behind.
pub const OBJECTS: &str = "\
SELECT s.name AS [Schema],
    o.type_desc AS [Type],
    o.name AS [Name]
FROM sys.all_objects o
INNER JOIN sys.schemas s ON s.schema_id = o.schema_id
WHERE o.type IN ('U', 'V') -- tables and views
    AND s.name <> 'sys'
    AND s.name <> 'INFORMATION_SCHEMA'
    AND s.name <> 'VersionInfo'
    AND s.name <> 'sysdiagrams'
    AND (@SchemaName IS NULL OR s.name = @SchemaName)
ORDER BY s.name";

pub const TABLE_COLUMNS: &str = "\
SELECT DISTINCT @ObjectName AS [ObjectName],
    sys.columns.name AS [FieldName],
    sys.types.name AS [DatabaseType],
    sys.columns.precision AS [NumericPrecision],
    sys.columns.scale AS [NumericScale],
    sys.columns.is_nullable AS [IsNullable],
    (
        SELECT COUNT(column_name)
        FROM INFORMATION_SCHEMA.CONSTRAINT_COLUMN_USAGE
        WHERE TABLE_NAME = sys.tables.name
            AND CONSTRAINT_NAME = (
                SELECT constraint_name
                FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS
                WHERE TABLE_NAME = sys.tables.name
                    AND constraint_type = 'PRIMARY KEY'
                    AND COLUMN_NAME = sys.columns.name
            )
    ) AS [IsPrimaryKey],
    COLUMNPROPERTY(OBJECT_ID(@ObjectName), sys.columns.name, 'IsIdentity') AS [IsIdentity],
    (
        SELECT ORDINAL_POSITION
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [Position],
    (
        SELECT COLUMN_DEFAULT
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [DefaultValue],
    (
        SELECT CHARACTER_MAXIMUM_LENGTH
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [MaxLength],
    (
        SELECT sik.keyno
        FROM sysobjects so
        INNER JOIN sysindexes si ON so.id = si.id
        INNER JOIN sysindexkeys sik ON so.id = sik.id AND si.indid = sik.indid
        INNER JOIN syscolumns sc ON so.id = sc.id AND sik.colid = sc.colid
        WHERE so.xtype = 'u'
            AND (si.status & 32) = 0
            AND (si.status & 2048) = 2048
            AND so.name = @ObjectName
            AND sc.name = sys.columns.name
    ) AS [KeyNo]
FROM sys.columns, sys.types, sys.tables
WHERE sys.tables.object_id = sys.columns.object_id
    AND sys.types.system_type_id = sys.columns.system_type_id
    AND sys.types.user_type_id = sys.columns.user_type_id
    AND sys.tables.name = @ObjectName
    AND sys.tables.schema_id = SCHEMA_ID(@Schema)
ORDER BY [Position]";

/// View columns carry no primary-key or key-number metadata; those fields are
/// hard-coded so the result shape matches [`TABLE_COLUMNS`].
pub const VIEW_COLUMNS: &str = "\
SELECT @ObjectName AS [ObjectName],
    sys.columns.name AS [FieldName],
    sys.types.name AS [DatabaseType],
    sys.columns.precision AS [NumericPrecision],
    sys.columns.scale AS [NumericScale],
    sys.columns.is_nullable AS [IsNullable],
    0 AS [IsPrimaryKey],
    COLUMNPROPERTY(OBJECT_ID(@ObjectName), sys.columns.name, 'IsIdentity') AS [IsIdentity],
    (
        SELECT ORDINAL_POSITION
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [Position],
    (
        SELECT COLUMN_DEFAULT
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [DefaultValue],
    (
        SELECT CHARACTER_MAXIMUM_LENGTH
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_NAME = @ObjectName
            AND TABLE_SCHEMA = @Schema
            AND COLUMN_NAME = sys.columns.name
    ) AS [MaxLength],
    NULL AS [KeyNo]
FROM sys.columns, sys.types, sys.views v
WHERE sys.columns.object_id = v.object_id
    AND v.name = @ObjectName
    AND sys.types.user_type_id = sys.columns.user_type_id";

/// Foreign keys declared by one table, with both ends of each relationship.
pub const FOREIGN_KEYS: &str = "\
SELECT oParent.name AS [ParentTableName],
    oParentColDtl.TABLE_SCHEMA AS [ParentTableSchema],
    oParentCol.name AS [ParentColumnName],
    oReference.name AS [ReferenceTableName],
    refSchema.name AS [ReferenceTableSchema],
    oReferenceCol.name AS [ReferenceColumnName]
FROM sys.foreign_key_columns fkc
INNER JOIN sys.sysobjects oConstraint ON fkc.constraint_object_id = oConstraint.id
INNER JOIN sys.sysobjects oParent ON fkc.parent_object_id = oParent.id
INNER JOIN sys.all_columns oParentCol ON fkc.parent_object_id = oParentCol.object_id
    AND fkc.parent_column_id = oParentCol.column_id
INNER JOIN sys.sysobjects oReference ON fkc.referenced_object_id = oReference.id
INNER JOIN INFORMATION_SCHEMA.COLUMNS oParentColDtl ON oParentColDtl.TABLE_NAME = oParent.name
    AND oParentColDtl.COLUMN_NAME = oParentCol.name
INNER JOIN sys.all_columns oReferenceCol ON fkc.referenced_object_id = oReferenceCol.object_id
    AND fkc.referenced_column_id = oReferenceCol.column_id
INNER JOIN sys.all_objects o ON o.object_id = oReference.id
INNER JOIN sys.schemas refSchema ON refSchema.schema_id = o.schema_id
WHERE oParent.name = @ObjectName
    AND oParentColDtl.TABLE_SCHEMA = @Schema";
