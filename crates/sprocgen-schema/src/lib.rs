//! Table metadata consumed by the procedure generator.
//!
//! A [`TableSchema`] owns the ordered column sequence of one table and the
//! role partitions derived from it once at construction.

pub mod column;
pub mod error;
pub mod table;

pub use column::{ColumnDescriptor, ColumnRole};
pub use error::SchemaError;
pub use table::TableSchema;

/// Schema name assumed when the caller does not supply one.
pub const DEFAULT_SCHEMA: &str = "dbo";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        DEFAULT_SCHEMA,
        column::{ColumnDescriptor, ColumnRole},
        error::SchemaError,
        table::TableSchema,
    };
}
