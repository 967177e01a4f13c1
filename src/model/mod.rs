//! Normalized schema model and assembly

mod builder;
mod columns;
mod elements;
mod schema_info;

pub use builder::build_schema;
pub use columns::column_definitions;
pub use elements::*;
pub use schema_info::DataSourceSchemaInfo;
