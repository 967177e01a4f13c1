//! Logical column types and system-generated default classification

mod column_type;
mod system_method;

pub use column_type::ColumnType;
pub use system_method::{DefaultValue, SystemMethod};
