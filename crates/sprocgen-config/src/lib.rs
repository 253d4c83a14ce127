//! `sprocgen.toml` configuration.
//!
//! Everything here has a default, so a missing file is equivalent to an
//! empty one. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use sprocgen_schema::DEFAULT_SCHEMA;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "sprocgen.toml";

/// Author stamped into headers when none is configured.
pub const DEFAULT_AUTHOR: &str = "sprocgen";

/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated_SPs";

/// Audit and concurrency columns left out of write parameter lists.
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &[
    "CreatedBy",
    "CreatedDate",
    "ModifiedBy",
    "ModifiedDate",
    "Concurrence",
    "rowguid",
];

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub author: String,
    pub excluded_columns: Vec<String>,
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            excluded_columns: DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            defaults: Defaults::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load `path`; a missing or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Load `path`, falling back to defaults only when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Excluded column names joined with `,` for the introspection query.
    #[must_use]
    pub fn excluded_columns_csv(&self) -> String {
        self.excluded_columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

///
/// Defaults
///
/// Values offered at each interactive prompt.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    pub schema: String,
    pub output_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            connection_string: None,
            schema: DEFAULT_SCHEMA.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.schema, "dbo");
        assert_eq!(config.defaults.output_dir, PathBuf::from("Generated_SPs"));
        assert_eq!(config.defaults.connection_string, None);
    }

    #[test]
    fn default_exclusions_render_as_csv() {
        assert_eq!(
            Config::default().excluded_columns_csv(),
            "CreatedBy,CreatedDate,ModifiedBy,ModifiedDate,Concurrence,rowguid"
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            author = "dba-team"
            excluded_columns = [" RowVersion ", "", "AuditUser"]

            [defaults]
            connection_string = "Server=localhost;Database=Sales;"
            "#,
        )
        .unwrap();

        assert_eq!(config.author, "dba-team");
        assert_eq!(config.excluded_columns_csv(), "RowVersion,AuditUser");
        assert_eq!(
            config.defaults.connection_string.as_deref(),
            Some("Server=localhost;Database=Sales;")
        );
        assert_eq!(config.defaults.schema, "dbo");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("autor = \"typo\"").is_err());
        assert!(Config::from_toml_str("[defaults]\ntable = \"Customer\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::load(dir.path().join(CONFIG_FILE)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn malformed_file_is_an_error_even_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"author = [").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[defaults]\nschema = \"sales\"\noutput_dir = \"out\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.defaults.schema, "sales");
        assert_eq!(config.defaults.output_dir, PathBuf::from("out"));
        assert_eq!(config.author, DEFAULT_AUTHOR);
    }
}
