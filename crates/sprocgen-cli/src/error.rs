use crate::{loader::LoadError, prompt::PromptError};
use sprocgen::{config::ConfigError, schema::SchemaError};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// CliError
///
/// Every failure is reported to the user as one line; nothing is rolled
/// back, so files written before the error stay on disk.
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("{0} must not be empty")]
    MissingInput(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("cannot start async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
