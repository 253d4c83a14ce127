use crate::{
    Generated, ProcedureBuilder, SkipReason,
    action::Action,
    format::{set_list, where_clause},
    template::{BODY, ErrorGuard, LIST, Procedure},
};

/// UPDATE of every writable column, keyed on the full primary key.
pub fn generate(builder: &ProcedureBuilder) -> Generated {
    let table = builder.table();
    let keys = table.primary_key_columns();
    let writable = table.writable_columns();

    if keys.is_empty() {
        return builder.skip(Action::Update, SkipReason::NoPrimaryKey);
    }
    if writable.is_empty() {
        return builder.skip(Action::Update, SkipReason::NoWritableColumns);
    }

    let parameters = table.update_parameter_columns();
    let statements = format!(
        "{BODY}UPDATE {target}
{BODY}SET
{LIST}{assignments}
{BODY}WHERE {predicate};",
        target = table.qualified_name(),
        assignments = set_list(&writable, LIST),
        predicate = where_clause(&keys, BODY),
    );

    let sql = Procedure {
        action: Action::Update,
        description: "Updates an existing record by its primary key.",
        returns: "Nothing.",
        parameters: &parameters,
        guard: ErrorGuard::Transaction,
        statements,
    }
    .render(builder);

    Generated::Procedure(sql)
}
