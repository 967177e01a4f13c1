//! SQL Server row source backed by tiberius
//!
//! The engine is synchronous; this adapter owns a current-thread tokio
//! runtime and blocks on each catalog query at the boundary.

use tiberius::{Client, ColumnData, Config, ToSql};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::error::SchemaReaderError;

use super::source::{ParamValue, Row, RowSource, SqlValue};

pub struct MssqlRowSource {
    runtime: Runtime,
    client: Client<Compat<TcpStream>>,
}

impl MssqlRowSource {
    /// Connect using an ADO.NET-style connection string
    /// (e.g. `Server=localhost,1433;User Id=sa;Password=...;Database=app`).
    pub fn connect(connection_string: &str) -> Result<Self, SchemaReaderError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| SchemaReaderError::Runtime { source })?;

        let config = Config::from_ado_string(connection_string)
            .map_err(|source| SchemaReaderError::Connection { source })?;
        let addr = config.get_addr();

        let client = runtime.block_on(async {
            let tcp = TcpStream::connect(config.get_addr())
                .await
                .map_err(|source| SchemaReaderError::Connect {
                    addr: addr.clone(),
                    source,
                })?;
            tcp.set_nodelay(true)
                .map_err(|source| SchemaReaderError::Connect {
                    addr: addr.clone(),
                    source,
                })?;
            Client::connect(config, tcp.compat_write())
                .await
                .map_err(|source| SchemaReaderError::Connection { source })
        })?;

        Ok(Self { runtime, client })
    }
}

impl RowSource for MssqlRowSource {
    fn query(
        &mut self,
        sql: &str,
        params: &[(&str, ParamValue)],
    ) -> Result<Vec<Row>, SchemaReaderError> {
        let text = with_named_params(sql, params);

        let values: Vec<Box<dyn ToSql>> = params
            .iter()
            .map(|(_, value)| match value {
                ParamValue::Null => Box::new(Option::<String>::None) as Box<dyn ToSql>,
                ParamValue::String(s) => Box::new(s.clone()) as Box<dyn ToSql>,
                ParamValue::Int(i) => Box::new(*i) as Box<dyn ToSql>,
            })
            .collect();
        let value_refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();

        let client = &mut self.client;
        let rows = self
            .runtime
            .block_on(async {
                let stream = client.query(text.as_str(), &value_refs).await?;
                stream.into_first_result().await
            })
            .map_err(|source| SchemaReaderError::Query { source })?;

        Ok(rows.into_iter().map(convert_row).collect())
    }
}

/// Bridge named parameters onto tiberius's positional `@P1..@Pn` binding by
/// declaring each name in a prologue. The queries reference parameters more
/// than once and test them for NULL, so plain text substitution won't do.
fn with_named_params(sql: &str, params: &[(&str, ParamValue)]) -> String {
    if params.is_empty() {
        return sql.to_string();
    }

    let mut text = String::new();
    for (position, (name, value)) in params.iter().enumerate() {
        let sql_type = match value {
            ParamValue::Int(_) => "int",
            ParamValue::Null | ParamValue::String(_) => "nvarchar(128)",
        };
        text.push_str(&format!(
            "DECLARE @{} {} = @P{};\n",
            name,
            sql_type,
            position + 1
        ));
    }
    text.push_str(sql);
    text
}

fn convert_row(row: tiberius::Row) -> Row {
    let names: Vec<String> = row
        .columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect();

    let fields = names
        .into_iter()
        .zip(row.into_iter().map(convert_value))
        .collect();

    Row::new(fields)
}

/// Narrow the tiberius value space to what the catalog queries produce.
/// Anything outside it (spatial values, timestamps) reads as NULL.
fn convert_value(data: ColumnData<'static>) -> SqlValue {
    match data {
        ColumnData::Bit(value) => value.map(SqlValue::Bool).unwrap_or(SqlValue::Null),
        ColumnData::U8(value) => value
            .map(|v| SqlValue::Int(i64::from(v)))
            .unwrap_or(SqlValue::Null),
        ColumnData::I16(value) => value
            .map(|v| SqlValue::Int(i64::from(v)))
            .unwrap_or(SqlValue::Null),
        ColumnData::I32(value) => value
            .map(|v| SqlValue::Int(i64::from(v)))
            .unwrap_or(SqlValue::Null),
        ColumnData::I64(value) => value.map(SqlValue::Int).unwrap_or(SqlValue::Null),
        ColumnData::String(value) => value
            .map(|v| SqlValue::String(v.into_owned()))
            .unwrap_or(SqlValue::Null),
        _ => SqlValue::Null,
    }
}
