//! Catalog access: the row-source boundary, query text, and raw result shapes

mod mssql;
pub mod queries;
mod rows;
mod source;

pub use mssql::MssqlRowSource;
pub use rows::*;
pub use source::{ParamValue, Row, RowSource, SqlValue};
