use crate::{
    Generated, ProcedureBuilder,
    action::Action,
    format::column_list,
    template::{BODY, ErrorGuard, LIST, Procedure},
};

// Filtering, paging and ordering are left to whoever edits the output.
const SCOPE_NOTE: &str = "-- NOTE: add filtering, pagination and ordering as needed.";

/// Parameterless SELECT of every column.
pub fn generate(builder: &ProcedureBuilder) -> Generated {
    let table = builder.table();
    let all: Vec<_> = table.columns().iter().collect();

    let statements = format!(
        "{BODY}{SCOPE_NOTE}

{BODY}SELECT
{LIST}{columns}
{BODY}FROM {from};",
        columns = column_list(&all, LIST),
        from = table.qualified_name(),
    );

    let sql = Procedure {
        action: Action::List,
        description: "Gets a list of all records.",
        returns: "Result set of all records.",
        parameters: &[],
        guard: ErrorGuard::ReadOnly,
        statements,
    }
    .render(builder);

    Generated::Procedure(sql)
}
