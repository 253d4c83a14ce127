use thiserror::Error as ThisError;

///
/// SchemaError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("table '{schema}.{table}' was not found or has no columns")]
    NoColumns { schema: String, table: String },
}
