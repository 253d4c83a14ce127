use crate::{
    column::{ColumnDescriptor, ColumnRole},
    error::SchemaError,
};

///
/// TableSchema
///
/// Immutable column metadata for one table. Column order is the physical
/// ordinal order and is preserved by every derived partition.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSchema {
    schema_name: String,
    table_name: String,
    columns: Vec<ColumnDescriptor>,
    partitions: Partitions,
}

// Index lists into `columns`, one per role.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Partitions {
    primary_key: Vec<usize>,
    writable: Vec<usize>,
    create_input: Vec<usize>,
    update_parameter: Vec<usize>,
}

impl Partitions {
    fn derive(columns: &[ColumnDescriptor]) -> Self {
        let mut partitions = Self::default();

        for (i, column) in columns.iter().enumerate() {
            for role in ColumnRole::ALL {
                if role.admits(column) {
                    partitions.slot_mut(role).push(i);
                }
            }
        }

        partitions
    }

    const fn slot(&self, role: ColumnRole) -> &Vec<usize> {
        match role {
            ColumnRole::PrimaryKey => &self.primary_key,
            ColumnRole::Writable => &self.writable,
            ColumnRole::CreateInput => &self.create_input,
            ColumnRole::UpdateParameter => &self.update_parameter,
        }
    }

    const fn slot_mut(&mut self, role: ColumnRole) -> &mut Vec<usize> {
        match role {
            ColumnRole::PrimaryKey => &mut self.primary_key,
            ColumnRole::Writable => &mut self.writable,
            ColumnRole::CreateInput => &mut self.create_input,
            ColumnRole::UpdateParameter => &mut self.update_parameter,
        }
    }
}

impl TableSchema {
    /// Build the schema for one table, deriving every role partition.
    ///
    /// An empty column sequence means the table does not exist (or has no
    /// columns) and is rejected.
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> Result<Self, SchemaError> {
        let schema_name = schema_name.into();
        let table_name = table_name.into();

        if columns.is_empty() {
            return Err(SchemaError::NoColumns {
                schema: schema_name,
                table: table_name,
            });
        }

        let partitions = Partitions::derive(&columns);

        Ok(Self {
            schema_name,
            table_name,
            columns,
            partitions,
        })
    }

    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// `[schema].[table]`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("[{}].[{}]", self.schema_name, self.table_name)
    }

    /// Every column, in ordinal order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Columns admitted by `role`, in ordinal order.
    #[must_use]
    pub fn columns_in(&self, role: ColumnRole) -> Vec<&ColumnDescriptor> {
        self.partitions
            .slot(role)
            .iter()
            .map(|&i| &self.columns[i])
            .collect()
    }

    #[must_use]
    pub fn count_in(&self, role: ColumnRole) -> usize {
        self.partitions.slot(role).len()
    }

    #[must_use]
    pub fn primary_key_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns_in(ColumnRole::PrimaryKey)
    }

    #[must_use]
    pub fn writable_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns_in(ColumnRole::Writable)
    }

    #[must_use]
    pub fn create_input_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns_in(ColumnRole::CreateInput)
    }

    #[must_use]
    pub fn update_parameter_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns_in(ColumnRole::UpdateParameter)
    }
}

///
/// TESTS
///
