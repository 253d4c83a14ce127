use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::Not,
};

///
/// ColumnDescriptor
///
/// One physical table column as reported by catalog introspection.
/// `sql_type` is the fully rendered type expression (`varchar(50)`,
/// `decimal(10,2)`) and is emitted verbatim.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_primary_key: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_nullable: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_identity: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_excluded: bool,
}

impl ColumnDescriptor {
    /// Create a non-key, non-nullable column with no special role.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            is_primary_key: false,
            is_nullable: false,
            is_identity: false,
            is_excluded: false,
        }
    }

    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    #[must_use]
    pub const fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    #[must_use]
    pub const fn excluded(mut self) -> Self {
        self.is_excluded = true;
        self
    }
}

impl Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.name, self.sql_type)
    }
}

///
/// ColumnRole
///
/// The partitions of a table's columns used by the generated procedures.
/// Membership is a pure function of a column's flags.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnRole {
    /// Participates in the primary-key constraint.
    PrimaryKey,

    /// Eligible for both INSERT values and UPDATE SET entries.
    Writable,

    /// Supplied by the caller on insert; includes natural keys.
    CreateInput,

    /// Writable columns plus every key column.
    UpdateParameter,
}

impl ColumnRole {
    pub const ALL: [Self; 4] = [
        Self::PrimaryKey,
        Self::Writable,
        Self::CreateInput,
        Self::UpdateParameter,
    ];

    /// Return whether `column` belongs to this role.
    #[must_use]
    pub const fn admits(self, column: &ColumnDescriptor) -> bool {
        let caller_supplied = !column.is_identity && !column.is_excluded;

        match self {
            Self::PrimaryKey => column.is_primary_key,
            Self::Writable => caller_supplied && !column.is_primary_key,
            Self::CreateInput => caller_supplied,
            Self::UpdateParameter => caller_supplied || column.is_primary_key,
        }
    }
}

///
/// TESTS
///
