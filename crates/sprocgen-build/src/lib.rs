//! CRUD stored-procedure text generation.
//!
//! [`ProcedureBuilder`] turns one [`TableSchema`] into the `Create`, `Get`,
//! `Update` and `List` procedures. Generation is pure: the same table,
//! author and date always produce the same text.

mod create;
mod get;
mod list;
mod template;
mod update;

pub mod action;
pub mod format;
pub mod header;
pub mod naming;

pub use action::Action;
pub use naming::ProcedureName;

use derive_more::Display;
use sprocgen_schema::TableSchema;
use time::Date;

///
/// ProcedureBuilder
///

#[derive(Clone, Debug)]
pub struct ProcedureBuilder {
    table: TableSchema,
    names: ProcedureName,
    author: String,
    creation_date: Date,
}

impl ProcedureBuilder {
    /// Create a builder for one table. `author` and `creation_date` are
    /// stamped into every header.
    pub fn new(table: TableSchema, author: impl Into<String>, creation_date: Date) -> Self {
        let names = ProcedureName::new(table.table_name());

        Self {
            table,
            names,
            author: author.into(),
            creation_date,
        }
    }

    #[must_use]
    pub const fn table(&self) -> &TableSchema {
        &self.table
    }

    #[must_use]
    pub const fn names(&self) -> &ProcedureName {
        &self.names
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn creation_date(&self) -> Date {
        self.creation_date
    }

    #[must_use]
    pub fn file_name(&self, action: Action) -> String {
        self.names.file_name(action)
    }

    #[must_use]
    pub fn generate_create(&self) -> Generated {
        create::generate(self)
    }

    #[must_use]
    pub fn generate_get(&self) -> Generated {
        get::generate(self)
    }

    #[must_use]
    pub fn generate_update(&self) -> Generated {
        update::generate(self)
    }

    #[must_use]
    pub fn generate_list(&self) -> Generated {
        list::generate(self)
    }

    #[must_use]
    pub fn generate(&self, action: Action) -> Generated {
        match action {
            Action::Create => self.generate_create(),
            Action::Get => self.generate_get(),
            Action::Update => self.generate_update(),
            Action::List => self.generate_list(),
        }
    }

    /// Generate every action, paired with its file name, in emission order.
    #[must_use]
    pub fn generate_all(&self) -> Vec<GeneratedFile> {
        Action::ALL
            .into_iter()
            .map(|action| GeneratedFile {
                action,
                file_name: self.file_name(action),
                output: self.generate(action),
            })
            .collect()
    }

    // skip
    // single-line comment standing in for a procedure that cannot be built
    fn skip(&self, action: Action, reason: SkipReason) -> Generated {
        let comment = format!(
            "-- Cannot generate {} for {}: {reason}.",
            action.keyword(),
            self.table.table_name()
        );

        Generated::Skipped { reason, comment }
    }
}

///
/// Generated
///
/// Result of one generation operation. A skipped operation still yields
/// text (a SQL comment) so callers can write or log it like any other output.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Generated {
    Procedure(String),
    Skipped { reason: SkipReason, comment: String },
}

impl Generated {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Procedure(sql) => sql,
            Self::Skipped { comment, .. } => comment,
        }
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Procedure(sql) => sql,
            Self::Skipped { comment, .. } => comment,
        }
    }
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum SkipReason {
    #[display("table has no primary key")]
    NoPrimaryKey,

    #[display("table has no updatable columns")]
    NoWritableColumns,
}

///
/// GeneratedFile
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub action: Action,
    pub file_name: String,
    pub output: Generated,
}

///
/// TESTS
///
