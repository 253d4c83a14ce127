use crate::{args::Args, error::CliError};
use rustyline::{DefaultEditor, error::ReadlineError};
use sprocgen::config::Config;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// PromptError
///

#[derive(Debug, ThisError)]
pub enum PromptError {
    #[error("input cancelled")]
    Cancelled,

    #[error("cannot read input: {0}")]
    Readline(#[from] ReadlineError),
}

///
/// LineSource
///
/// Where interactive answers come from.
///

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(PromptError::Cancelled),
            Err(e) => Err(e.into()),
        }
    }
}

/// Blank (or whitespace-only) input selects `default`.
#[must_use]
pub fn resolve_input(line: &str, default: &str) -> String {
    let line = line.trim();

    if line.is_empty() {
        default.to_string()
    } else {
        line.to_string()
    }
}

// ask
// prompt with the default shown, or take the default without asking
fn ask<'a>(
    source: Option<&mut (dyn LineSource + 'a)>,
    label: &str,
    default: &str,
) -> Result<String, PromptError> {
    let Some(source) = source else {
        return Ok(default.to_string());
    };

    let prompt = if default.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} (default: '{default}'): ")
    };

    Ok(resolve_input(&source.read_line(&prompt)?, default))
}

///
/// Inputs
///
/// Everything needed to run one generation, after flags, config defaults
/// and prompts have been merged.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inputs {
    pub connection: Option<String>,
    pub schema: String,
    pub table: String,
    pub output_dir: PathBuf,
    pub author: String,
}

impl Inputs {
    /// Merge flags over config defaults, prompting for whatever is unset.
    /// Prompts run in order: connection string, schema, table, output
    /// directory. The connection string is neither asked for nor required
    /// when columns come from a JSON file.
    pub fn resolve(
        args: &Args,
        config: &Config,
        mut source: Option<&mut dyn LineSource>,
    ) -> Result<Self, CliError> {
        let defaults = &config.defaults;

        let connection = if args.from_json.is_some() {
            None
        } else {
            let connection = match &args.connection {
                Some(value) => value.clone(),
                None => ask(
                    source.as_deref_mut(),
                    "Connection string",
                    defaults.connection_string.as_deref().unwrap_or_default(),
                )?,
            };
            if connection.trim().is_empty() {
                return Err(CliError::MissingInput("connection string"));
            }
            Some(connection)
        };

        let schema = match &args.schema {
            Some(value) => value.clone(),
            None => ask(source.as_deref_mut(), "Schema", &defaults.schema)?,
        };

        let table = match &args.table {
            Some(value) => value.trim().to_string(),
            None => ask(source.as_deref_mut(), "Table name", "")?,
        };
        if table.is_empty() {
            return Err(CliError::MissingInput("table name"));
        }

        let output_dir = match &args.output_dir {
            Some(value) => value.clone(),
            None => {
                let default = defaults.output_dir.display().to_string();
                PathBuf::from(ask(source.as_deref_mut(), "Output directory", &default)?)
            }
        };

        let author = args.author.clone().unwrap_or_else(|| config.author.clone());

        Ok(Self {
            connection,
            schema,
            table,
            output_dir,
            author,
        })
    }
}

///
/// TESTS
///
