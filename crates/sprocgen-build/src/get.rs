use crate::{
    Generated, ProcedureBuilder, SkipReason,
    action::Action,
    format::{column_list, where_clause},
    template::{BODY, ErrorGuard, LIST, Procedure},
};

/// Single-row SELECT of every column, keyed on the full primary key.
pub fn generate(builder: &ProcedureBuilder) -> Generated {
    let table = builder.table();
    let keys = table.primary_key_columns();

    if keys.is_empty() {
        return builder.skip(Action::Get, SkipReason::NoPrimaryKey);
    }

    let all: Vec<_> = table.columns().iter().collect();
    let statements = format!(
        "{BODY}SELECT
{LIST}{columns}
{BODY}FROM {from}
{BODY}WHERE {predicate};",
        columns = column_list(&all, LIST),
        from = table.qualified_name(),
        predicate = where_clause(&keys, BODY),
    );

    let sql = Procedure {
        action: Action::Get,
        description: "Gets a record by its primary key.",
        returns: "The record matching the primary key.",
        parameters: &keys,
        guard: ErrorGuard::ReadOnly,
        statements,
    }
    .render(builder);

    Generated::Procedure(sql)
}
