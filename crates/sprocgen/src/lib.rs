//! ## Crate layout
//! - `schema`: column descriptors, table metadata and role partitions.
//! - `build`: stored-procedure text generation and file naming.
//! - `config`: `sprocgen.toml` loading and defaults.
//!
//! The `prelude` module brings the types needed to go from a column list to
//! generated files into scope.

pub use sprocgen_build as build;
pub use sprocgen_config as config;
pub use sprocgen_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Action, Generated, GeneratedFile, ProcedureBuilder, SkipReason},
        config::Config,
        schema::{ColumnDescriptor, ColumnRole, SchemaError, TableSchema},
    };
    pub use time::Date;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_covers_the_generation_path() {
        let config = Config::default();
        let table = TableSchema::new(
            "dbo",
            "Customer",
            vec![
                ColumnDescriptor::new("Id", "int").primary_key().identity(),
                ColumnDescriptor::new("Name", "varchar(50)"),
            ],
        )
        .unwrap();
        let date = Date::from_calendar_date(2024, time::Month::January, 2).unwrap();

        let files = ProcedureBuilder::new(table, config.author, date).generate_all();

        assert_eq!(files.len(), Action::ALL.len());
        assert!(files[0].output.text().contains("-- Author:      sprocgen"));
    }
}
