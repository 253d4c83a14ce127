use crate::{
    Generated, ProcedureBuilder,
    action::Action,
    format::{column_list, params_list},
    template::{BODY, ErrorGuard, LIST, Procedure},
};

const RETURN_IDENTITY: &str = "SELECT SCOPE_IDENTITY() AS InsertedId;";

/// INSERT of every caller-supplied column. The new identity is returned
/// only when the table has exactly one key column.
pub fn generate(builder: &ProcedureBuilder) -> Generated {
    let table = builder.table();
    let inputs = table.create_input_columns();
    let single_key = table.primary_key_columns().len() == 1;

    let insert = if inputs.is_empty() {
        format!("{BODY}INSERT INTO {} DEFAULT VALUES;", table.qualified_name())
    } else {
        format!(
            "{BODY}INSERT INTO {} (
{LIST}{columns}
{BODY})
{BODY}VALUES (
{values}
{BODY});",
            table.qualified_name(),
            columns = column_list(&inputs, LIST),
            values = params_list(&inputs, LIST, false),
        )
    };

    let result = if single_key {
        format!("{BODY}{RETURN_IDENTITY}")
    } else {
        format!(
            "{BODY}-- Optional: return the new identity or the created record.
{BODY}-- {RETURN_IDENTITY}"
        )
    };

    let returns = if single_key {
        "Result set (InsertedId) with the identity of the new record."
    } else {
        "Nothing."
    };

    let sql = Procedure {
        action: Action::Create,
        description: "Creates a new record in the table.",
        returns,
        parameters: &inputs,
        guard: ErrorGuard::Transaction,
        statements: format!("{insert}\n\n{result}"),
    }
    .render(builder);

    Generated::Procedure(sql)
}
