//! Column metadata sources: a live SQL Server catalog or a JSON file.

use sprocgen::schema::ColumnDescriptor;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tiberius::{Client, Config, Row};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

/// One row per column of `@P1.@P2`, in ordinal order. `@P3` is the
/// comma-separated list of column names to flag as excluded.
pub const COLUMNS_QUERY: &str = r"
SELECT
    c.COLUMN_NAME,
    DATA_TYPE = CASE
        WHEN c.DATA_TYPE IN ('char', 'varchar', 'nchar', 'nvarchar', 'binary', 'varbinary')
            THEN CONCAT(c.DATA_TYPE, '(',
                CASE WHEN c.CHARACTER_MAXIMUM_LENGTH = -1
                     THEN 'MAX'
                     ELSE CAST(c.CHARACTER_MAXIMUM_LENGTH AS NVARCHAR(10)) END,
                ')')
        WHEN c.DATA_TYPE IN ('decimal', 'numeric')
            THEN CONCAT(c.DATA_TYPE, '(', c.NUMERIC_PRECISION, ',', c.NUMERIC_SCALE, ')')
        ELSE c.DATA_TYPE
    END,
    IS_PK = CAST(ISNULL(pk.IsPk, 0) AS BIT),
    IS_NULLABLE = CAST(CASE WHEN c.IS_NULLABLE = 'YES' THEN 1 ELSE 0 END AS BIT),
    IS_IDENTITY = CAST(ISNULL(COLUMNPROPERTY(
        OBJECT_ID(QUOTENAME(c.TABLE_SCHEMA) + '.' + QUOTENAME(c.TABLE_NAME)),
        c.COLUMN_NAME, 'IsIdentity'), 0) AS BIT),
    IS_EXCLUDED = CAST(CASE WHEN xc.ColumnName IS NOT NULL THEN 1 ELSE 0 END AS BIT)
FROM INFORMATION_SCHEMA.COLUMNS c
LEFT JOIN (
    SELECT
        SCHEMA_NAME(t.schema_id) AS TableSchema,
        t.name AS TableName,
        col.name AS ColumnName,
        1 AS IsPk
    FROM sys.tables t
    JOIN sys.indexes i ON t.object_id = i.object_id
    JOIN sys.index_columns ic ON i.object_id = ic.object_id AND i.index_id = ic.index_id
    JOIN sys.columns col ON ic.object_id = col.object_id AND col.column_id = ic.column_id
    WHERE i.is_primary_key = 1
) pk ON c.TABLE_SCHEMA = pk.TableSchema
    AND c.TABLE_NAME = pk.TableName
    AND c.COLUMN_NAME = pk.ColumnName
LEFT JOIN (
    SELECT LTRIM(RTRIM(value)) AS ColumnName FROM STRING_SPLIT(@P3, ',')
) xc ON c.COLUMN_NAME = xc.ColumnName
WHERE c.TABLE_SCHEMA = @P1
  AND c.TABLE_NAME = @P2
ORDER BY c.ORDINAL_POSITION;
";

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("database error: {0}")]
    Database(#[from] tiberius::error::Error),

    #[error("cannot reach database: {0}")]
    Connect(#[from] std::io::Error),

    #[error("catalog returned NULL for {0}")]
    NullValue(&'static str),

    #[error("cannot read '{path}': {source}")]
    ReadJson {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid column file '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

///
/// ColumnSource
///

#[derive(Clone, Debug)]
pub enum ColumnSource {
    Database { connection_string: String },
    JsonFile(PathBuf),
}

impl ColumnSource {
    /// Load the columns of `schema.table` in ordinal order. `excluded` is the
    /// comma-separated list rendered by `Config::excluded_columns_csv`. An
    /// empty result is returned as-is; the caller decides that it means
    /// "not found".
    pub async fn load(
        &self,
        schema: &str,
        table: &str,
        excluded: &str,
    ) -> Result<Vec<ColumnDescriptor>, LoadError> {
        match self {
            Self::Database { connection_string } => {
                query_catalog(connection_string, schema, table, excluded).await
            }
            Self::JsonFile(path) => {
                let columns = read_json(path)?;
                Ok(apply_exclusions(columns, excluded))
            }
        }
    }
}

async fn connect(connection_string: &str) -> Result<Client<Compat<TcpStream>>, LoadError> {
    let config = Config::from_ado_string(connection_string)?;

    let tcp = TcpStream::connect(config.get_addr()).await?;
    tcp.set_nodelay(true)?;

    match Client::connect(config.clone(), tcp.compat_write()).await {
        Ok(client) => Ok(client),

        // Azure SQL may redirect to another node once.
        Err(tiberius::error::Error::Routing { host, port }) => {
            tracing::debug!(%host, port, "following server redirect");

            let mut config = config;
            config.host(&host);
            config.port(port);

            let tcp = TcpStream::connect(config.get_addr()).await?;
            tcp.set_nodelay(true)?;

            Ok(Client::connect(config, tcp.compat_write()).await?)
        }

        Err(e) => Err(e.into()),
    }
}

async fn query_catalog(
    connection_string: &str,
    schema: &str,
    table: &str,
    excluded: &str,
) -> Result<Vec<ColumnDescriptor>, LoadError> {
    let mut client = connect(connection_string).await?;
    tracing::debug!(schema, table, "querying catalog");

    let rows = client
        .query(COLUMNS_QUERY, &[&schema, &table, &excluded])
        .await?
        .into_first_result()
        .await?;

    rows.iter().map(column_from_row).collect()
}

fn column_from_row(row: &Row) -> Result<ColumnDescriptor, LoadError> {
    let text = |name: &'static str| -> Result<String, LoadError> {
        row.try_get::<&str, _>(name)?
            .map(ToString::to_string)
            .ok_or(LoadError::NullValue(name))
    };
    let flag = |name: &'static str| -> Result<bool, LoadError> {
        Ok(row.try_get::<bool, _>(name)?.unwrap_or(false))
    };

    Ok(ColumnDescriptor {
        name: text("COLUMN_NAME")?,
        sql_type: text("DATA_TYPE")?,
        is_primary_key: flag("IS_PK")?,
        is_nullable: flag("IS_NULLABLE")?,
        is_identity: flag("IS_IDENTITY")?,
        is_excluded: flag("IS_EXCLUDED")?,
    })
}

fn read_json(path: &Path) -> Result<Vec<ColumnDescriptor>, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::ReadJson {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&source).map_err(|source| LoadError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

// apply_exclusions
// flag configured columns the same way the catalog query does
fn apply_exclusions(columns: Vec<ColumnDescriptor>, excluded: &str) -> Vec<ColumnDescriptor> {
    columns
        .into_iter()
        .map(|mut column| {
            if excluded.split(',').any(|name| name.trim() == column.name) {
                column.is_excluded = true;
            }
            column
        })
        .collect()
}

///
/// TESTS
///
